use notecap_core::format::OutputFormat;

/// Parse output format from string
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse a non-negative weight
pub fn parse_weight(s: &str) -> std::result::Result<f64, String> {
    let weight: f64 = s.parse().map_err(|_| format!("invalid weight: {}", s))?;
    if weight.is_finite() && weight >= 0.0 {
        Ok(weight)
    } else {
        Err(format!("weight must be a non-negative number: {}", s))
    }
}
