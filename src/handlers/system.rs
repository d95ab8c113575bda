use axum::{response::Html, Json};
use serde_json::{json, Value};

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>Product Catalog Administration</title></head>
<body>
<h1>Product Catalog Administration</h1>
<p>Manage products through the <code>/products</code> REST resource.</p>
</body>
</html>
"#;

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn health_check() -> Json<Value> {
    Json(json!({ "message": "OK" }))
}
