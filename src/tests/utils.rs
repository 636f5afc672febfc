use crate::app::App;
use crate::config::create_test_config;
use crate::domain::listing::{Listing, Record};
use crate::domain::places::Office;
use astra::{Body, Request, Response};
use parquet::data_type::{ByteArray, ByteArrayType, DoubleType};
use parquet::file::properties::WriterProperties;
use parquet::file::writer::SerializedFileWriter;
use parquet::schema::parser::parse_message_type;
use serde_json::{json, Value};
use std::fs::File;
use std::io::Read;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

/// Unique path under the system temp dir.
pub fn temp_path(name: &str, ext: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir()
        .join(format!("apartments_{name}_{}_{nanos}.{ext}", std::process::id()))
        .to_string_lossy()
        .into_owned()
}

pub fn write_temp_file(name: &str, ext: &str, contents: &[u8]) -> String {
    let path = temp_path(name, ext);
    std::fs::write(&path, contents).expect("Failed to write temp dataset");
    path
}

/// `n` Amsterdam apartments online for 10 days, ids "apt-0".."apt-{n-1}".
pub fn sample_csv(n: usize) -> String {
    let mut csv = String::from(
        "id,title,city,price,lat,lng,surface_area_amount,first_seen_at,last_seen_at\n",
    );
    for i in 0..n {
        csv.push_str(&format!(
            "apt-{i},Flat {i},amsterdam,1200,{},{},50,2024-01-01 09:00:00.000,2024-01-11 09:00:00.000\n",
            52.35 + 0.001 * i as f64,
            4.88 + 0.001 * i as f64
        ));
    }
    csv
}

pub fn sample_listings(n: usize) -> Vec<Listing> {
    let office = Office::named("the Office");
    (0..n)
        .map(|i| {
            let rec: Record = match json!({
                "id": format!("apt-{i}"),
                "title": format!("Flat {i}"),
                "city": "amsterdam",
                "price": 1200,
                "lat": 52.35 + 0.001 * i as f64,
                "lng": 4.88 + 0.001 * i as f64,
                "surface_area_amount": 50,
                "first_seen_at": "2024-01-01 09:00:00.000",
                "last_seen_at": "2024-01-11 09:00:00.000",
            }) {
                Value::Object(map) => map,
                _ => unreachable!(),
            };
            Listing::from_record(i, &rec, &office).unwrap().unwrap()
        })
        .collect()
}

/// Parquet file with a `coordinates` struct column, like the scraper writes.
pub fn write_sample_parquet(name: &str, n: usize) -> String {
    let path = temp_path(name, "parquet");
    let schema = Arc::new(
        parse_message_type(
            "
            message apartment {
                REQUIRED BYTE_ARRAY title (UTF8);
                REQUIRED BYTE_ARRAY city (UTF8);
                REQUIRED DOUBLE price;
                REQUIRED GROUP coordinates {
                    REQUIRED DOUBLE lat;
                    REQUIRED DOUBLE lng;
                }
                REQUIRED DOUBLE surface_area_amount;
                REQUIRED BYTE_ARRAY first_seen_at (UTF8);
                REQUIRED BYTE_ARRAY last_seen_at (UTF8);
            }
            ",
        )
        .unwrap(),
    );

    let titles: Vec<ByteArray> = (0..n)
        .map(|i| ByteArray::from(format!("Parquet flat {i}").as_str()))
        .collect();
    let cities: Vec<ByteArray> = (0..n).map(|_| ByteArray::from("utrecht")).collect();
    let prices: Vec<f64> = (0..n).map(|i| 1000.0 + 100.0 * i as f64).collect();
    let lats: Vec<f64> = (0..n).map(|i| 52.09 + 0.001 * i as f64).collect();
    let lngs: Vec<f64> = (0..n).map(|i| 5.12 + 0.001 * i as f64).collect();
    let surfaces: Vec<f64> = (0..n).map(|i| 40.0 + i as f64).collect();
    let first_seen: Vec<ByteArray> = (0..n)
        .map(|_| ByteArray::from("2024-02-01 08:00:00.000"))
        .collect();
    let last_seen: Vec<ByteArray> = (0..n)
        .map(|_| ByteArray::from("2024-02-04 08:00:00.000"))
        .collect();

    let file = File::create(&path).unwrap();
    let props = Arc::new(WriterProperties::builder().build());
    let mut writer = SerializedFileWriter::new(file, schema, props).unwrap();
    let mut row_group = writer.next_row_group().unwrap();

    // Leaf columns in schema order.
    let mut col = row_group.next_column().unwrap().unwrap();
    col.typed::<ByteArrayType>().write_batch(&titles, None, None).unwrap();
    col.close().unwrap();

    let mut col = row_group.next_column().unwrap().unwrap();
    col.typed::<ByteArrayType>().write_batch(&cities, None, None).unwrap();
    col.close().unwrap();

    for values in [&prices, &lats, &lngs, &surfaces] {
        let mut col = row_group.next_column().unwrap().unwrap();
        col.typed::<DoubleType>().write_batch(values, None, None).unwrap();
        col.close().unwrap();
    }

    for values in [&first_seen, &last_seen] {
        let mut col = row_group.next_column().unwrap().unwrap();
        col.typed::<ByteArrayType>().write_batch(values, None, None).unwrap();
        col.close().unwrap();
    }

    row_group.close().unwrap();
    writer.close().unwrap();
    path
}

pub fn test_app(dataset_uri: &str, format: &str, max_entries: usize) -> App {
    let mut config = create_test_config(dataset_uri, format);
    config.max_entries = max_entries;
    App::new(config)
}

pub fn get(uri: &str) -> Request {
    let mut req = Request::new(Body::empty());
    *req.uri_mut() = uri.parse().unwrap();
    req
}

pub fn body_string(mut resp: Response) -> String {
    let mut body = Vec::new();
    resp.body_mut().reader().read_to_end(&mut body).unwrap();
    String::from_utf8(body).unwrap()
}

/// The JSON embedded for the client-side map script.
pub fn map_payload(html: &str) -> Value {
    let start_tag = r#"<script type="application/json" id="map-data">"#;
    let start = html.find(start_tag).expect("page has no map payload") + start_tag.len();
    let len = html[start..].find("</script>").unwrap();
    serde_json::from_str(&html[start..start + len]).unwrap()
}

/// `unwrap_err` without requiring `Debug` on the response.
pub fn expect_err(result: crate::errors::ResultResp) -> crate::errors::AppError {
    match result {
        Ok(resp) => panic!("expected an error, got HTTP {}", resp.status()),
        Err(err) => err,
    }
}
