use serde_json::Value;
use std::io;

use fixed_interest_core::loan::schedule::ScheduleRow;

/// Write output as CSV to stdout.
///
/// Amortization output renders as the schedule row format; everything
/// else renders as two-column field,value records.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    let result = value.as_object().and_then(|m| m.get("result")).unwrap_or(value);

    match result {
        Value::Object(map) if map.contains_key("rows") => {
            // Round-trip through the typed rows so columns keep the
            // export order rather than the JSON map's key order
            if let Ok(rows) =
                serde_json::from_value::<Vec<ScheduleRow>>(map["rows"].clone())
            {
                let _ = write_schedule(&mut wtr, &rows);
            }
        }
        Value::Object(map) => {
            let _ = wtr.write_record(["field", "value"]);
            for (key, val) in map {
                let _ = wtr.write_record([key.as_str(), &format_csv_value(val)]);
            }
        }
        _ => {
            let _ = wtr.write_record([&format_csv_value(result)]);
        }
    }

    let _ = wtr.flush();
}

/// Export a schedule to a CSV file at `path`.
///
/// Called only after the schedule has been fully generated, so a file is
/// never left holding a partial schedule.
pub fn write_schedule_file(
    path: &str,
    rows: &[ScheduleRow],
) -> Result<(), Box<dyn std::error::Error>> {
    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| format!("Failed to create '{path}': {e}"))?;
    write_schedule(&mut wtr, rows)?;
    wtr.flush()?;
    Ok(())
}

/// Header `month,payment,principal_paid,interest_paid,remaining_balance`,
/// one record per period, money as decimal strings with two fractional
/// digits. Dated schedules carry a `payment_date` column after `month`.
fn write_schedule<W: io::Write>(
    wtr: &mut csv::Writer<W>,
    rows: &[ScheduleRow],
) -> Result<(), csv::Error> {
    let dated = rows.first().is_some_and(|r| r.payment_date.is_some());

    if dated {
        wtr.write_record([
            "month",
            "payment_date",
            "payment",
            "principal_paid",
            "interest_paid",
            "remaining_balance",
        ])?;
    } else {
        wtr.write_record([
            "month",
            "payment",
            "principal_paid",
            "interest_paid",
            "remaining_balance",
        ])?;
    }

    for row in rows {
        let month = row.period.to_string();
        let payment = format!("{:.2}", row.payment);
        let principal = format!("{:.2}", row.principal_paid);
        let interest = format!("{:.2}", row.interest_paid);
        let balance = format!("{:.2}", row.remaining_balance);

        if dated {
            let date = row
                .payment_date
                .map(|d| d.to_string())
                .unwrap_or_default();
            wtr.write_record([&month, &date, &payment, &principal, &interest, &balance])?;
        } else {
            wtr.write_record([&month, &payment, &principal, &interest, &balance])?;
        }
    }

    Ok(())
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
