use paws_adopt::{Client, Data, MemoryBackend, Query, Row, TableBackend};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;

const USER: &str = "00000000-0000-0000-0000-000000000001";

fn row(v: Value) -> Row {
    v.as_object().cloned().expect("object literal")
}

fn ids(rows: &[Row]) -> Vec<String> {
    rows.iter()
        .map(|r| r["id"].as_str().expect("string id").to_string())
        .collect()
}

fn seeded_client() -> (Client, Arc<MemoryBackend>) {
    let mem = Arc::new(MemoryBackend::seeded());
    (Client::new(mem.clone()), mem)
}

#[tokio::test]
async fn scenario_a_location_filter() {
    let (client, _) = seeded_client();
    let res = client
        .table("pets")
        .select("*")
        .eq("location", "台北市")
        .execute()
        .await
        .unwrap();
    assert_eq!(ids(res.rows()), vec!["1", "4"]);
    assert_eq!(res.count, None);
}

#[tokio::test]
async fn scenario_b_insert_then_select_favorite() {
    let (client, _) = seeded_client();
    let inserted = client
        .table("favorites")
        .insert(row(json!({"user_id": USER, "pet_id": "2"})))
        .execute()
        .await
        .unwrap();
    assert_eq!(inserted.count, Some(1));
    let inserted_row = inserted.rows()[0].clone();
    assert_eq!(inserted_row["id"], json!("1"));

    let found = client
        .table("favorites")
        .select("*")
        .eq("user_id", USER)
        .execute()
        .await
        .unwrap();
    assert_eq!(found.rows(), &[inserted_row]);
    assert_eq!(found.rows()[0]["pet_id"], json!("2"));
}

#[tokio::test]
async fn scenario_c_update_listing_status() {
    let listing = row(json!({
        "id": "L1", "user_id": USER, "name": "Momo", "pet_type": "貓咪", "breed": "米克斯",
        "age": "1 歲", "gender": "母", "status": "active"
    }));
    let other = row(json!({"id": "L2", "user_id": USER, "name": "Coco", "status": "active"}));
    let mem = Arc::new(MemoryBackend::with_tables(HashMap::from([(
        "pet_listings".to_string(),
        vec![listing.clone(), other.clone()],
    )])));
    let client = Client::new(mem.clone());

    let updated = client
        .table("pet_listings")
        .update(row(json!({"status": "adopted"})))
        .eq("id", "L1")
        .execute()
        .await
        .unwrap();
    assert_eq!(ids(updated.rows()), vec!["L1"]);

    let after = client
        .table("pet_listings")
        .select("*")
        .eq("id", "L1")
        .single()
        .execute()
        .await
        .unwrap()
        .into_single()
        .expect("listing still present");
    let mut expected = listing;
    expected.insert("status".into(), json!("adopted"));
    assert_eq!(after, expected);

    let untouched = mem.snapshot("pet_listings").await;
    assert_eq!(untouched[1], other);
}

#[tokio::test]
async fn scenario_d_single_missing_row_is_none() {
    let (client, _) = seeded_client();
    let res = client
        .table("pets")
        .select("*")
        .eq("id", "missing")
        .single()
        .execute()
        .await
        .expect("a missing row is not an error");
    assert_eq!(res.data, Data::One(None));
}

#[tokio::test]
async fn single_returns_first_of_many() {
    let (client, _) = seeded_client();
    let res = client
        .table("pets")
        .eq("pet_type", "狗狗")
        .single()
        .execute()
        .await
        .unwrap();
    match res.data {
        Data::One(Some(r)) => assert_eq!(r["id"], json!("1")),
        other => panic!("expected one row, got {:?}", other),
    }
}

#[tokio::test]
async fn filters_combine_with_and() {
    let (client, _) = seeded_client();
    let res = client
        .table("pets")
        .eq("pet_type", "狗狗")
        .eq("is_featured", true)
        .in_list("location", ["台北市", "台中市"])
        .execute()
        .await
        .unwrap();
    assert_eq!(ids(res.rows()), vec!["1", "5"]);

    let none = client
        .table("pets")
        .eq("pet_type", "狗狗")
        .eq("pet_type", "貓咪")
        .execute()
        .await
        .unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn wrapped_and_bare_inserts_produce_the_same_rows() {
    let r = row(json!({"user_id": USER, "pet_id": "3"}));
    let a = MemoryBackend::empty();
    let b = MemoryBackend::empty();
    let from_row = a.execute(&Query::new("favorites").insert(r.clone())).await.unwrap();
    let from_vec = b.execute(&Query::new("favorites").insert(vec![r])).await.unwrap();
    assert_eq!(from_row, from_vec);
    assert_eq!(a.snapshot("favorites").await, b.snapshot("favorites").await);
}

#[tokio::test]
async fn ids_do_not_collide_after_delete() {
    let (client, mem) = seeded_client();
    for pet in ["1", "2", "3"] {
        client
            .table("favorites")
            .insert(row(json!({"user_id": USER, "pet_id": pet})))
            .execute()
            .await
            .unwrap();
    }
    client.table("favorites").delete().eq("pet_id", "1").execute().await.unwrap();
    client
        .table("favorites")
        .insert(vec![row(json!({"pet_id": "4"})), row(json!({"pet_id": "5"}))])
        .execute()
        .await
        .unwrap();

    let all = ids(&mem.snapshot("favorites").await);
    let mut unique = all.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(all.len(), 4);
    assert_eq!(unique.len(), 4, "duplicate ids in {:?}", all);
}

#[tokio::test]
async fn delete_removes_only_matching_rows() {
    let (client, mem) = seeded_client();
    let res = client
        .table("pets")
        .delete()
        .eq("location", "台中市")
        .execute()
        .await
        .unwrap();
    assert!(res.is_empty());
    assert_eq!(res.count, Some(0));
    assert_eq!(ids(&mem.snapshot("pets").await), vec!["1", "2", "4"]);
}

#[tokio::test]
async fn delete_honours_membership_filters() {
    let (client, mem) = seeded_client();
    client
        .table("pets")
        .delete()
        .in_list("id", ["2", "5"])
        .execute()
        .await
        .unwrap();
    assert_eq!(ids(&mem.snapshot("pets").await), vec!["1", "3", "4"]);
}

#[tokio::test]
async fn update_touches_only_matching_rows() {
    let (client, mem) = seeded_client();
    let before = mem.snapshot("pets").await;
    let res = client
        .table("pets")
        .update(row(json!({"is_featured": false})))
        .eq("pet_type", "貓咪")
        .execute()
        .await
        .unwrap();
    assert_eq!(ids(res.rows()), vec!["2", "4"]);
    assert_eq!(res.count, Some(2));

    let after = mem.snapshot("pets").await;
    for (b, a) in before.iter().zip(after.iter()) {
        if b["pet_type"] == json!("貓咪") {
            assert_eq!(a["is_featured"], json!(false));
            assert_eq!(a["name"], b["name"]);
        } else {
            assert_eq!(a, b);
        }
    }
}

#[tokio::test]
async fn count_reported_only_when_requested() {
    let (client, _) = seeded_client();
    let counted = client
        .table("pets")
        .select_with_count("id", paws_adopt::CountMode::Exact)
        .eq("location", "台北市")
        .execute()
        .await
        .unwrap();
    assert_eq!(counted.count, Some(2));
}

#[tokio::test]
async fn ordering_and_limit_are_not_applied_offline() {
    let (client, _) = seeded_client();
    let res = client
        .table("pets")
        .order("name", true)
        .limit(2)
        .execute()
        .await
        .unwrap();
    assert_eq!(ids(res.rows()), vec!["1", "2", "3", "4", "5"]);
}
