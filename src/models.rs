//! Address record returned by a successful lookup.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single address as returned by the Postcode API.
///
/// The API has served two shapes over time: a flat one (`town`, `latitude`,
/// `x`, ...) and a nested one (`city.label`, `geo.center.wgs84.coordinates`,
/// ...). Every accessor checks the known locations in order and returns
/// `None` when none of them holds a value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address {
    data: Map<String, Value>,
}

impl Address {
    pub(crate) fn new(data: Map<String, Value>) -> Self {
        Self { data }
    }

    /// The untouched JSON object.
    pub fn raw(&self) -> &Map<String, Value> {
        &self.data
    }

    /// Look up a top-level field of the raw object.
    pub fn get(&self, key: &str) -> Option<&Value> {
        present(self.data.get(key))
    }

    /// `street`.
    pub fn street(&self) -> Option<String> {
        self.get("street").and_then(text)
    }

    /// `number`, else `house_number`. Empty when the lookup was done without one.
    pub fn house_number(&self) -> Option<String> {
        self.get("number")
            .or_else(|| self.get("house_number"))
            .and_then(text)
    }

    /// `postcode`.
    pub fn postcode(&self) -> Option<String> {
        self.get("postcode").and_then(text)
    }

    /// `city.label`, else flat `town`.
    pub fn town(&self) -> Option<String> {
        self.path(&["city", "label"])
            .or_else(|| self.get("town"))
            .and_then(text)
    }

    /// `municipality.label`, or `municipality` when it is a plain string.
    pub fn municipality(&self) -> Option<String> {
        self.label_or_text("municipality")
    }

    /// `province.label`, or `province` when it is a plain string.
    pub fn province(&self) -> Option<String> {
        self.label_or_text("province")
    }

    /// Flat `latitude`, else the first wgs84 coordinate.
    pub fn latitude(&self) -> Option<f64> {
        self.get("latitude")
            .and_then(Value::as_f64)
            .or_else(|| self.coordinate("wgs84", 0))
    }

    /// Flat `longitude`, else the second wgs84 coordinate.
    pub fn longitude(&self) -> Option<f64> {
        self.get("longitude")
            .and_then(Value::as_f64)
            .or_else(|| self.coordinate("wgs84", 1))
    }

    /// Rijksdriehoek x.
    pub fn x(&self) -> Option<f64> {
        self.get("x")
            .and_then(Value::as_f64)
            .or_else(|| self.coordinate("rd", 0))
    }

    /// Rijksdriehoek y.
    pub fn y(&self) -> Option<f64> {
        self.get("y")
            .and_then(Value::as_f64)
            .or_else(|| self.coordinate("rd", 1))
    }

    /// Construction year.
    pub fn year(&self) -> Option<i64> {
        match self.get("year")? {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Walk nested objects, stopping at the first missing or non-object step.
    fn path(&self, keys: &[&str]) -> Option<&Value> {
        let (first, rest) = keys.split_first()?;
        let mut current = self.get(first)?;
        for key in rest {
            current = present(current.as_object()?.get(*key))?;
        }
        Some(current)
    }

    /// `field.label` when `field` is an object, otherwise `field` itself.
    fn label_or_text(&self, field: &str) -> Option<String> {
        match self.get(field)? {
            Value::Object(obj) => present(obj.get("label")).and_then(text),
            other => text(other),
        }
    }

    fn coordinate(&self, system: &str, index: usize) -> Option<f64> {
        self.path(&["geo", "center", system, "coordinates"])?
            .as_array()?
            .get(index)?
            .as_f64()
    }
}

fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn address(value: Value) -> Address {
        match value {
            Value::Object(map) => Address::new(map),
            other => panic!("expected an object, got {other}"),
        }
    }

    #[test]
    fn nested_shape() {
        let addr = address(json!({
            "city": { "label": "Amsterdam" },
            "number": "12",
            "geo": { "center": { "wgs84": { "coordinates": [4.895, 52.370] } } }
        }));

        assert_eq!(addr.town().as_deref(), Some("Amsterdam"));
        assert_eq!(addr.house_number().as_deref(), Some("12"));
        assert_eq!(addr.latitude(), Some(4.895));
        assert_eq!(addr.longitude(), Some(52.370));
        assert_eq!(addr.x(), None);
        assert_eq!(addr.y(), None);
    }

    #[test]
    fn full_nested_shape() {
        let addr = address(json!({
            "street": "Evert van de Beekstraat",
            "house_number": 104,
            "postcode": "1118CN",
            "city": { "id": "0394", "label": "Schiphol" },
            "municipality": { "id": "0394", "label": "Haarlemmermeer" },
            "province": { "id": "27", "label": "Noord-Holland" },
            "year": 2010,
            "geo": {
                "center": {
                    "wgs84": { "type": "Point", "coordinates": [4.7449, 52.3034] },
                    "rd": { "type": "Point", "coordinates": [111924.0, 479563.0] }
                }
            }
        }));

        assert_eq!(addr.street().as_deref(), Some("Evert van de Beekstraat"));
        assert_eq!(addr.house_number().as_deref(), Some("104"));
        assert_eq!(addr.postcode().as_deref(), Some("1118CN"));
        assert_eq!(addr.town().as_deref(), Some("Schiphol"));
        assert_eq!(addr.municipality().as_deref(), Some("Haarlemmermeer"));
        assert_eq!(addr.province().as_deref(), Some("Noord-Holland"));
        assert_eq!(addr.x(), Some(111924.0));
        assert_eq!(addr.y(), Some(479563.0));
        assert_eq!(addr.year(), Some(2010));
    }

    #[test]
    fn flat_shape() {
        let addr = address(json!({
            "street": "Grote Markt",
            "number": 2,
            "postcode": "2011RD",
            "town": "Haarlem",
            "municipality": "Haarlem",
            "province": "Noord-Holland",
            "latitude": 52.381,
            "longitude": 4.636,
            "x": 103848.0,
            "y": 488180.0,
            "year": "1250"
        }));

        assert_eq!(addr.house_number().as_deref(), Some("2"));
        assert_eq!(addr.town().as_deref(), Some("Haarlem"));
        assert_eq!(addr.municipality().as_deref(), Some("Haarlem"));
        assert_eq!(addr.province().as_deref(), Some("Noord-Holland"));
        assert_eq!(addr.latitude(), Some(52.381));
        assert_eq!(addr.longitude(), Some(4.636));
        assert_eq!(addr.x(), Some(103848.0));
        assert_eq!(addr.y(), Some(488180.0));
        assert_eq!(addr.year(), Some(1250));
    }

    #[test]
    fn flat_fields_win_over_nested() {
        let addr = address(json!({
            "number": "1",
            "house_number": "99",
            "latitude": 52.0,
            "geo": { "center": { "wgs84": { "coordinates": [4.0, 51.0] } } }
        }));

        assert_eq!(addr.house_number().as_deref(), Some("1"));
        assert_eq!(addr.latitude(), Some(52.0));
        assert_eq!(addr.longitude(), Some(51.0));
    }

    #[test]
    fn city_without_label_falls_back_to_town() {
        let addr = address(json!({ "city": { "id": "1" }, "town": "Utrecht" }));
        assert_eq!(addr.town().as_deref(), Some("Utrecht"));
    }

    #[test]
    fn empty_record_is_all_none() {
        let addr = address(json!({}));

        assert_eq!(addr.street(), None);
        assert_eq!(addr.house_number(), None);
        assert_eq!(addr.postcode(), None);
        assert_eq!(addr.town(), None);
        assert_eq!(addr.municipality(), None);
        assert_eq!(addr.province(), None);
        assert_eq!(addr.latitude(), None);
        assert_eq!(addr.longitude(), None);
        assert_eq!(addr.x(), None);
        assert_eq!(addr.y(), None);
        assert_eq!(addr.year(), None);
    }

    #[test]
    fn broken_nesting_is_none() {
        let addr = address(json!({
            "latitude": null,
            "geo": { "center": "nowhere" },
            "province": { "id": "27" }
        }));

        assert_eq!(addr.latitude(), None);
        assert_eq!(addr.x(), None);
        assert_eq!(addr.province(), None);
    }

    #[test]
    fn serializes_as_raw_object() {
        let value = json!({ "postcode": "1234AB", "number": 5 });
        let addr = address(value.clone());
        assert_eq!(serde_json::to_value(&addr).unwrap(), value);
    }
}
