//! Sample rows loaded into the in-memory backend in offline mode.

use crate::query::Row;
use serde_json::{json, Value};
use std::collections::HashMap;

/// Tables present in a fresh offline store; the ones without sample rows start empty.
pub const KNOWN_TABLES: &[&str] = &[
    "pets",
    "stories",
    "favorites",
    "adoption_applications",
    "pet_listings",
    "message_threads",
    "messages",
    "users",
];

fn rows(value: Value) -> Vec<Row> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|v| match v {
                Value::Object(map) => Some(map),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

fn pets() -> Vec<Row> {
    rows(json!([
        {
            "id": "1", "name": "Bella", "breed": "黃金獵犬", "age": "2 歲", "age_group": "成年",
            "gender": "母", "size": "大型", "pet_type": "狗狗", "location": "台北市",
            "distance": "2.5 公里外",
            "image_url": "https://placehold.co/800x600/orange/white?text=Bella",
            "description": "Bella 是一隻熱愛陽光的狗狗，喜歡在海灘散步和追網球。",
            "adoption_fee": 150, "is_vaccinated": true, "is_neutered": true, "is_featured": true,
            "tags": ["愛玩", "對小孩友善", "已訓練", "活潑"]
        },
        {
            "id": "2", "name": "Milo", "breed": "美國短毛貓", "age": "8 個月", "age_group": "幼年",
            "gender": "公", "size": "小型", "pet_type": "貓咪", "location": "新北市",
            "distance": "5.1 公里外",
            "image_url": "https://placehold.co/800x600/gray/white?text=Milo",
            "description": "Milo 是一隻愛撒嬌的小貓，特別喜歡玩雷射筆。",
            "adoption_fee": 100, "is_vaccinated": true, "is_neutered": false, "is_featured": false,
            "tags": ["愛撒嬌", "安靜"]
        },
        {
            "id": "3", "name": "Rocky", "breed": "巴哥", "age": "4 歲", "age_group": "成年",
            "gender": "公", "size": "小型", "pet_type": "狗狗", "location": "台中市",
            "distance": "1.2 公里外",
            "image_url": "https://placehold.co/800x600/brown/white?text=Rocky",
            "description": "Rocky 是一隻穩重的巴哥混種，非常有規矩，適合新手領養。",
            "adoption_fee": 120, "is_vaccinated": true, "is_neutered": true, "is_featured": false,
            "tags": ["穩重", "已訓練"]
        },
        {
            "id": "4", "name": "Luna", "breed": "暹羅貓", "age": "1 歲", "age_group": "成年",
            "gender": "母", "size": "中型", "pet_type": "貓咪", "location": "台北市",
            "distance": "3 公里外",
            "image_url": "https://placehold.co/800x600/ivory/black?text=Luna",
            "description": "Luna 聲音甜美，喜歡與人對話，是非常好的陪伴伴侶。",
            "adoption_fee": 120, "is_vaccinated": true, "is_neutered": true, "is_featured": false,
            "tags": ["愛說話", "黏人", "優雅"]
        },
        {
            "id": "5", "name": "Charlie", "breed": "柯基", "age": "4 歲", "age_group": "成年",
            "gender": "公", "size": "中型", "pet_type": "狗狗", "location": "台中市",
            "distance": "150 公里外",
            "image_url": "https://placehold.co/800x600/goldenrod/white?text=Charlie",
            "description": "Charlie 雖然腿短但跑得很快，是你慢跑的最佳夥伴。",
            "adoption_fee": 180, "is_vaccinated": true, "is_neutered": true, "is_featured": true,
            "tags": ["可愛", "活力", "吃貨"]
        }
    ]))
}

fn stories() -> Vec<Row> {
    rows(json!([
        {
            "id": "s1", "author": "Sarah", "pet_name": "Luna",
            "content": "Luna 為我們的生活帶來了無限歡樂！謝謝你們協助我們找到她。",
            "image_url": "https://picsum.photos/seed/sarah/200/200", "color": "bg-primary/5"
        },
        {
            "id": "s2", "author": "Mike", "pet_name": "Oliver",
            "content": "遇見 Oliver 之前我不認為自己是貓派，但他是我最好的夥伴。",
            "image_url": "https://picsum.photos/seed/mike/200/200", "color": "bg-accent-peach/10"
        }
    ]))
}

fn message_threads() -> Vec<Row> {
    rows(json!([
        {
            "id": "00000000-0000-0000-0000-000000000011",
            "user_id": "00000000-0000-0000-0000-000000000001",
            "shelter_name": "快樂爪收容所",
            "shelter_avatar": "https://picsum.photos/seed/shelter/100/100",
            "pet_name": "Bella"
        }
    ]))
}

fn messages() -> Vec<Row> {
    rows(json!([
        {
            "id": "m1",
            "thread_id": "00000000-0000-0000-0000-000000000011",
            "sender": "other",
            "text": "您好，關於您領養 Bella 的申請，我們想與您確認下週二上午 10:00 是否方便前來面談呢？",
            "is_read": true
        }
    ]))
}

fn users() -> Vec<Row> {
    rows(json!([
        {
            "id": "00000000-0000-0000-0000-000000000001",
            "name": "Alex",
            "email": "alex@example.com",
            "avatar_url": "https://picsum.photos/seed/alex/300/300",
            "member_since": "2023-01-01"
        }
    ]))
}

pub fn seed_tables() -> HashMap<String, Vec<Row>> {
    let mut tables: HashMap<String, Vec<Row>> = KNOWN_TABLES
        .iter()
        .map(|t| (t.to_string(), Vec::new()))
        .collect();
    tables.insert("pets".into(), pets());
    tables.insert("stories".into(), stories());
    tables.insert("message_threads".into(), message_threads());
    tables.insert("messages".into(), messages());
    tables.insert("users".into(), users());
    tables
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_contains_every_known_table() {
        let tables = seed_tables();
        for t in KNOWN_TABLES {
            assert!(tables.contains_key(*t), "missing {}", t);
        }
        assert_eq!(tables["pets"].len(), 5);
        assert_eq!(tables["stories"].len(), 2);
        assert!(tables["favorites"].is_empty());
    }
}
