use crate::models::irradiance::{City, Month};
use crate::services::calculator_service::FormState;

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn select<T: Copy + PartialEq>(
    html: &mut String,
    name: &str,
    placeholder: &str,
    options: &[T],
    selected: Option<T>,
    label: impl Fn(T) -> &'static str,
) {
    html.push_str(&format!("        <select id=\"{name}\" name=\"{name}\">\n"));
    html.push_str(&format!("          <option value=\"\">{placeholder}</option>\n"));
    for &opt in options {
        let sel = if selected == Some(opt) { " selected" } else { "" };
        let text = label(opt);
        html.push_str(&format!("          <option value=\"{text}\"{sel}>{text}</option>\n"));
    }
    html.push_str("        </select>\n");
}

/// Full calculator page for the given state.
pub fn render(state: &FormState) -> String {
    let mut html = String::with_capacity(4096);
    html.push_str(concat!(
        "<!DOCTYPE html>\n",
        "<html lang=\"fr\">\n",
        "<head>\n",
        "  <meta charset=\"utf-8\">\n",
        "  <title>PV Capacity Calculator</title>\n",
        "  <script src=\"/calculator.js\" defer></script>\n",
        "</head>\n",
        "<body>\n",
        "  <h1>PV Capacity Calculator</h1>\n",
        "  <form id=\"calculator\" method=\"post\" action=\"/\">\n",
    ));

    html.push_str("    <div>\n      <label>City:\n");
    select(&mut html, "city", "Select City", &City::ALL, state.city, City::name);
    html.push_str("      </label>\n    </div>\n");

    html.push_str("    <div>\n      <label>Month:\n");
    select(&mut html, "month", "Select Month", &Month::ALL, state.month, Month::name);
    html.push_str("      </label>\n    </div>\n");

    html.push_str(&format!(
        concat!(
            "    <div>\n      <label>Pump Power (CV):\n",
            "        <input type=\"number\" step=\"any\" name=\"pump_power_cv\" value=\"{}\">\n",
            "      </label>\n    </div>\n",
            "    <div>\n      <label>Operation Hours:\n",
            "        <input type=\"number\" step=\"any\" name=\"operation_hours\" value=\"{}\">\n",
            "      </label>\n    </div>\n",
            "    <div>\n      <label>Solar Irradiance (Wh/m²/day):\n",
            "        <input type=\"number\" id=\"solar_irradiance\" value=\"{}\" readonly>\n",
            "      </label>\n    </div>\n",
            "    <button type=\"submit\">Calculate</button>\n",
            "  </form>\n",
        ),
        escape(&state.pump_power_cv),
        escape(&state.operation_hours),
        state.solar_irradiance,
    ));

    if let Some(result) = &state.result {
        html.push_str(&format!(
            "  <div class=\"result\">\n    <h2>{}</h2>\n  </div>\n",
            result_line(result)
        ));
    }

    html.push_str("</body>\n</html>\n");
    html
}

pub fn result_line(formatted: &str) -> String {
    format!("Required Photovoltaic Capacity: {} kWc", formatted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> FormState {
        FormState {
            city: None,
            month: None,
            pump_power_cv: "75".into(),
            operation_hours: "10".into(),
            solar_irradiance: 0,
            result: None,
        }
    }

    #[test]
    fn lists_every_option_in_display_order() {
        let html = render(&state());
        let positions: Vec<usize> = Month::ALL
            .iter()
            .map(|m| html.find(&format!(r#"value="{}""#, m.name())).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        for c in City::ALL {
            assert!(html.contains(&format!(r#"<option value="{0}">{0}</option>"#, c.name())));
        }
        assert!(html.contains(r#"<option value="">Select City</option>"#));
        assert!(html.contains(r#"<option value="">Select Month</option>"#));
    }

    #[test]
    fn no_result_before_submit() {
        let html = render(&state());
        assert!(!html.contains("Required Photovoltaic Capacity"));
        assert!(html.contains(r#"id="solar_irradiance" value="0" readonly"#));
    }

    #[test]
    fn selection_and_result_are_rendered() {
        let mut s = state();
        s.city = Some(City::Tunis);
        s.month = Some(Month::Mars);
        s.solar_irradiance = 4450;
        s.result = Some("0.15".into());
        let html = render(&s);
        assert!(html.contains(r#"<option value="Tunis" selected>Tunis</option>"#));
        assert!(html.contains(r#"<option value="Mars" selected>Mars</option>"#));
        assert!(html.contains(r#"value="4450" readonly"#));
        assert!(html.contains("<h2>Required Photovoltaic Capacity: 0.15 kWc</h2>"));
    }

    #[test]
    fn echoed_values_are_escaped() {
        let mut s = state();
        s.pump_power_cv = r#""><script>"#.into();
        let html = render(&s);
        assert!(html.contains("&quot;&gt;&lt;script&gt;"));
        assert!(!html.contains(r#""><script>"#));
    }
}
