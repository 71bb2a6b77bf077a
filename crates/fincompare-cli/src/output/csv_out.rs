use serde_json::Value;
use std::io;

/// Schedule fields a single-model result may carry, written as month/value rows.
const SCHEDULE_FIELDS: [&str; 3] = ["cumulative_contributions", "cumulative_payments", "balances"];

/// Write output as CSV to stdout.
///
/// A comparison result emits the merged monthly series (one row per month);
/// a single-model result emits its schedule; anything else falls back to
/// field/value records.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    // Unwrap the computation envelope if present.
    let result = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    match result {
        Value::Object(map) => {
            if let Some(Value::Array(monthly)) = map.get("monthly") {
                write_array_csv(&mut wtr, monthly);
            } else if let Some((field, schedule)) = find_schedule(map) {
                let _ = wtr.write_record(["month", field]);
                for (i, entry) in schedule.iter().enumerate() {
                    let _ = wtr.write_record([&(i + 1).to_string(), &format_csv_value(entry)]);
                }
            } else {
                let _ = wtr.write_record(["field", "value"]);
                for (key, val) in map {
                    let _ = wtr.write_record([key.as_str(), &format_csv_value(val)]);
                }
            }
        }
        Value::Array(arr) => {
            write_array_csv(&mut wtr, arr);
        }
        _ => {
            let _ = wtr.write_record([&format_csv_value(result)]);
        }
    }

    let _ = wtr.flush();
}

fn find_schedule(map: &serde_json::Map<String, Value>) -> Option<(&'static str, &Vec<Value>)> {
    for field in SCHEDULE_FIELDS {
        if let Some(Value::Array(schedule)) = map.get(field) {
            return Some((field, schedule));
        }
    }
    None
}

fn write_array_csv(wtr: &mut csv::Writer<io::StdoutLock<'_>>, arr: &[Value]) {
    if arr.is_empty() {
        return;
    }

    if let Some(Value::Object(first)) = arr.first() {
        let headers: Vec<&str> = first.keys().map(|k| k.as_str()).collect();
        let _ = wtr.write_record(&headers);

        for item in arr {
            if let Value::Object(map) = item {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| map.get(*h).map(format_csv_value).unwrap_or_default())
                    .collect();
                let _ = wtr.write_record(&row);
            }
        }
    } else {
        for item in arr {
            let _ = wtr.write_record([&format_csv_value(item)]);
        }
    }
}

fn format_csv_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
