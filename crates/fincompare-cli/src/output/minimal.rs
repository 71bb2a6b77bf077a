use serde_json::Value;

/// Print just the key answer value from the output.
///
/// For a comparison that is the winning strategy; for single-model runs,
/// the first well-known scalar found, then the first field as fallback.
pub fn print_minimal(value: &Value) {
    // Try to extract the "result" envelope
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    if let Value::Object(map) = result_obj {
        // A comparison summary answers "which strategy"
        if let (Some(consortium), Some(financing)) = (
            map.get("consortium_is_cheapest").and_then(Value::as_bool),
            map.get("financing_is_cheapest").and_then(Value::as_bool),
        ) {
            let verdict = match (consortium, financing) {
                (true, true) => "tie",
                (true, false) => "consortium",
                (false, true) => "financing",
                (false, false) => "undetermined",
            };
            println!("{}", verdict);
            return;
        }

        // Priority list of key output fields
        let priority_keys = [
            "cet_pct",
            "monthly_installment",
            "monthly_payment",
            "final_amount",
            "total_paid",
        ];
        for key in &priority_keys {
            if let Some(val) = map.get(*key) {
                if !val.is_null() {
                    println!("{}", format_minimal(val));
                    return;
                }
            }
        }

        // Fall back to first field
        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_minimal(val));
            return;
        }
    }

    // Not an object, just print directly
    println!("{}", format_minimal(result_obj));
}

fn format_minimal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
