#![allow(dead_code)]

use mockito::{Matcher, Mock, ServerGuard};
use serde_json::{json, Value};

/// A TheMealDB lookup record with the given ingredients in slots 1..
pub fn meal_record(id: &str, title: &str, ingredients: &[&str]) -> Value {
    let mut record = json!({
        "idMeal": id,
        "strMeal": title,
        "strCategory": "Chicken",
        "strArea": "British",
        "strInstructions": "Cook it.",
        "strMealThumb": format!("https://www.themealdb.com/images/media/meals/{id}.jpg"),
        "strYoutube": "",
    });
    for slot in 1..=20 {
        let (name, measure) = match ingredients.get(slot - 1) {
            Some(name) => (json!(name), json!("1 cup")),
            None => (json!(""), json!(" ")),
        };
        record[format!("strIngredient{slot}")] = name;
        record[format!("strMeasure{slot}")] = measure;
    }
    record
}

pub async fn mock_filter(
    server: &mut ServerGuard,
    ingredient: &str,
    ids: Option<&[&str]>,
) -> Mock {
    let body = match ids {
        Some(ids) => {
            let meals: Vec<Value> = ids
                .iter()
                .map(|id| json!({ "idMeal": id, "strMeal": format!("Meal {id}") }))
                .collect();
            json!({ "meals": meals })
        }
        None => json!({ "meals": null }),
    };

    server
        .mock("GET", "/filter.php")
        .match_query(Matcher::UrlEncoded("i".into(), ingredient.into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await
}

pub async fn mock_lookup(server: &mut ServerGuard, id: &str, record: Option<Value>) -> Mock {
    let body = match record {
        Some(record) => json!({ "meals": [record] }),
        None => json!({ "meals": null }),
    };

    server
        .mock("GET", "/lookup.php")
        .match_query(Matcher::UrlEncoded("i".into(), id.into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await
}
