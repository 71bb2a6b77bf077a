use serde_json::Value;
use tabled::{builder::Builder, Table};

/// Format output as tables using the tabled crate.
///
/// A comparison result prints one table per strategy plus the cost ranking;
/// a single-model result prints one flat field/value table. Monthly series
/// are summarised rather than dumped — use `--output csv` for the full data.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => {
            if let Some(result) = map.get("result") {
                print_result_table(result, map);
            } else {
                print_flat_object(value);
            }
        }
        Value::Array(arr) => {
            print_array_table(arr);
        }
        _ => {
            println!("{}", value);
        }
    }
}

fn print_result_table(result: &Value, envelope: &serde_json::Map<String, Value>) {
    if let Value::Object(res_map) = result {
        if res_map.contains_key("consortium") && res_map.contains_key("financing") {
            print_comparison(res_map);
        } else {
            print_flat_object(result);
        }
    } else {
        println!("{}", result);
    }

    // Print warnings if any
    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }

    // Print methodology
    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

/// One section table per strategy, then the cost ranking.
fn print_comparison(summary: &serde_json::Map<String, Value>) {
    for key in ["consortium", "financing", "fixed_income"] {
        if let Some(section) = summary.get(key) {
            println!("{}", heading(key));
            print_flat_object(section);
            println!();
        }
    }

    let consortium_cheapest = summary
        .get("consortium_is_cheapest")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    let financing_cheapest = summary
        .get("financing_is_cheapest")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    let verdict = match (consortium_cheapest, financing_cheapest) {
        (true, true) => "tie — both cost the same in total",
        (true, false) => "consortium",
        (false, true) => "financing",
        (false, false) => "undetermined",
    };
    println!("Cheapest strategy: {}", verdict);
}

fn heading(key: &str) -> String {
    match key {
        "consortium" => "Consortium".to_string(),
        "financing" => "Financing".to_string(),
        "fixed_income" => "Fixed income".to_string(),
        other => other.to_string(),
    }
}

fn print_flat_object(value: &Value) {
    if let Value::Object(map) = value {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (key, val) in map {
            builder.push_record([key.as_str(), &format_value(val)]);
        }
        let table = Table::from(builder);
        println!("{}", table);
    }
}

fn print_array_table(arr: &[Value]) {
    if arr.is_empty() {
        println!("(empty)");
        return;
    }

    if let Some(Value::Object(first)) = arr.first() {
        let headers: Vec<String> = first.keys().cloned().collect();
        let mut builder = Builder::default();
        builder.push_record(&headers);

        for item in arr {
            if let Value::Object(map) = item {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| {
                        map.get(h.as_str())
                            .map(format_value)
                            .unwrap_or_default()
                    })
                    .collect();
                builder.push_record(row);
            }
        }

        let table = Table::from(builder);
        println!("{}", table);
    } else {
        for item in arr {
            println!("{}", format_value(item));
        }
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(arr) => format!("[{} monthly values]", arr.len()),
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}
