use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;
use tabled::{builder::Builder, Table};

use super::currency::format_currency;

/// Format output as a table using the tabled crate.
///
/// Monetary values arrive as decimal strings (the core serialises
/// Decimal as strings) and are rendered as currency; counts and dates
/// pass through untouched.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => {
            if let Some(result) = map.get("result") {
                print_result(result, map);
            } else {
                print_fields(value);
            }
        }
        Value::Array(arr) => print_rows(arr),
        _ => println!("{value}"),
    }
}

fn print_result(result: &Value, envelope: &serde_json::Map<String, Value>) {
    match result {
        // Amortization: the rows table, then the summary fields
        Value::Object(map) if map.contains_key("rows") => {
            if let Some(Value::Array(rows)) = map.get("rows") {
                print_rows(rows);
            }
            let summary: serde_json::Map<String, Value> = map
                .iter()
                .filter(|(k, _)| *k != "rows")
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect();
            println!();
            print_fields(&Value::Object(summary));
        }
        Value::Object(_) => print_fields(result),
        _ => println!("{result}"),
    }

    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for warning in warnings {
                if let Value::String(text) = warning {
                    println!("  - {text}");
                }
            }
        }
    }

    if let Some(Value::String(methodology)) = envelope.get("methodology") {
        println!("\nMethodology: {methodology}");
    }
}

fn print_fields(value: &Value) {
    if let Value::Object(map) = value {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (key, val) in map {
            builder.push_record([key.as_str(), &format_value(val)]);
        }
        println!("{}", Table::from(builder));
    }
}

fn print_rows(rows: &[Value]) {
    if rows.is_empty() {
        println!("(empty)");
        return;
    }

    if let Some(Value::Object(first)) = rows.first() {
        let headers: Vec<String> = first.keys().cloned().collect();
        let mut builder = Builder::default();
        builder.push_record(&headers);

        for row in rows {
            if let Value::Object(map) = row {
                let record: Vec<String> = headers
                    .iter()
                    .map(|h| map.get(h).map(format_value).unwrap_or_default())
                    .collect();
                builder.push_record(record);
            }
        }

        println!("{}", Table::from(builder));
    } else {
        for row in rows {
            println!("{}", format_value(row));
        }
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => match Decimal::from_str(s) {
            Ok(amount) => format_currency(amount),
            Err(_) => s.clone(),
        },
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(format_value).collect();
            items.join(", ")
        }
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value_money_string() {
        assert_eq!(format_value(&Value::String("404139.6".into())), "404,139.60");
    }

    #[test]
    fn test_format_value_passthrough() {
        assert_eq!(format_value(&Value::String("2026-11-30".into())), "2026-11-30");
        assert_eq!(format_value(&serde_json::json!(360)), "360");
    }
}
