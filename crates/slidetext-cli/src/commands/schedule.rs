use anyhow::{bail, Result};
use serde::Serialize;

use slidetext_core::marquee::{SlideDecline, SlideParams, SlideSchedule};

/// Schedule (or refusal) for one set of inputs
#[derive(Debug, Serialize)]
struct Report {
    params: SlideParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    schedule: Option<SlideSchedule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    declined: Option<SlideDecline>,
}

pub fn run(display: f64, content: f64, velocity: f64, spacing: f64, delay: f64, json: bool) -> Result<()> {
    let params = validate(display, content, velocity, spacing, delay)?;
    let output = if json { render_json(params)? } else { render_table(params) };
    println!("{}", output);
    Ok(())
}

fn validate(display: f64, content: f64, velocity: f64, spacing: f64, delay: f64) -> Result<SlideParams> {
    for (name, value) in [("display", display), ("content", content), ("spacing", spacing), ("delay", delay)] {
        if !value.is_finite() || value < 0.0 {
            bail!("--{} must be a finite, non-negative number (got {})", name, value);
        }
    }
    Ok(SlideParams {
        display_width: display,
        desired_width: content,
        velocity,
        spacing,
        delay,
    })
}

fn report(params: SlideParams) -> Report {
    match params.schedule() {
        Ok(schedule) => Report {
            params,
            schedule: Some(schedule),
            declined: None,
        },
        Err(reason) => Report {
            params,
            schedule: None,
            declined: Some(reason),
        },
    }
}

fn render_json(params: SlideParams) -> Result<String> {
    Ok(serde_json::to_string_pretty(&report(params))?)
}

fn render_table(params: SlideParams) -> String {
    let report = report(params);
    let Some(schedule) = report.schedule else {
        let reason = report.declined.map(|r| r.to_string()).unwrap_or_default();
        return format!("No slide: {}", reason);
    };

    let t = schedule.timing;
    let mut lines = vec![
        format!(
            "D={} W={} v={} s={} delay={}",
            params.display_width, params.desired_width, params.velocity, params.spacing, params.delay
        ),
        String::new(),
        format!("  gap              {:>10.3}s", t.gap),
        format!("  slide from edge  {:>10.3}s", t.slide_from_edge),
        format!("  loop             {:>10.3}s", t.loop_duration),
        format!("  first leg        {:>10.3}s", t.first_leg),
        format!("  copy 1 delay     {:>10.3}s", t.copy1_delay),
        format!("  copy 2 delay     {:>10.3}s", t.copy2_delay),
        String::new(),
    ];

    let motions = std::iter::once(("primary", schedule.primary))
        .chain([("copy 1", schedule.copies[0]), ("copy 2", schedule.copies[1])]);
    for (name, m) in motions {
        let repeat = match m.period {
            Some(period) => format!("every {:.3}s", period),
            None => "once".to_string(),
        };
        lines.push(format!(
            "  {:<8} {:>8.1} -> {:<8.1} over {:.3}s after {:.3}s, {}",
            name, m.from, m.to, m.duration, m.delay, repeat
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_for_reference_inputs() {
        let params = validate(100.0, 250.0, 50.0, 30.0, 1.0).unwrap();
        let table = render_table(params);
        assert!(table.contains("gap                   1.400s"));
        assert!(table.contains("copy 2 delay         10.200s"));
        assert!(table.contains("every 11.200s"));
    }

    #[test]
    fn test_declined_inputs() {
        let params = validate(100.0, 80.0, 50.0, 30.0, 1.0).unwrap();
        assert_eq!(render_table(params), "No slide: content already fits the container");

        let json = render_json(validate(30.0, 80.0, 50.0, 30.0, 1.0).unwrap()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["declined"], "no_room_for_spacing");
        assert!(value.get("schedule").is_none());
    }

    #[test]
    fn test_json_schedule() {
        let json = render_json(validate(100.0, 250.0, 50.0, 30.0, 1.0).unwrap()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let copy1 = value["schedule"]["timing"]["copy1_delay"].as_f64().unwrap();
        assert!((copy1 - 4.6).abs() < 1e-9);
        assert!(value["schedule"]["primary"]["period"].is_null());
    }

    #[test]
    fn test_rejects_negative_inputs() {
        assert!(validate(100.0, 250.0, 50.0, -1.0, 1.0).is_err());
        assert!(validate(100.0, 250.0, 50.0, 30.0, -0.5).is_err());
        assert!(validate(f64::NAN, 250.0, 50.0, 30.0, 1.0).is_err());
    }
}
