use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GpsLineError {
    #[error("expected 'lat, long'")]
    Format,
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("latitude {0} is outside -90..90")]
    LatitudeOutOfRange(f64),
    #[error("longitude {0} is outside -180..180")]
    LongitudeOutOfRange(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GpsLineResult {
    pub line_no: usize,
    pub raw: String,
    pub result: Result<Coordinate, GpsLineError>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GpsReport {
    pub lines: Vec<GpsLineResult>,
}

impl GpsReport {
    pub fn valid_count(&self) -> usize {
        self.lines.iter().filter(|line| line.result.is_ok()).count()
    }

    pub fn invalid_count(&self) -> usize {
        self.lines.len() - self.valid_count()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

pub fn parse_coordinate(text: &str) -> Result<Coordinate, GpsLineError> {
    let mut parts = text.split(',');
    let (Some(lat), Some(long), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(GpsLineError::Format);
    };
    let latitude = parse_number(lat)?;
    let longitude = parse_number(long)?;
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(GpsLineError::LatitudeOutOfRange(latitude));
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(GpsLineError::LongitudeOutOfRange(longitude));
    }
    Ok(Coordinate {
        latitude,
        longitude,
    })
}

fn parse_number(text: &str) -> Result<f64, GpsLineError> {
    let text = text.trim();
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(GpsLineError::NotANumber(text.to_string())),
    }
}

/// Validates one `lat, long` pair per line. Blank lines are skipped.
pub fn check_coordinates(input: &str) -> GpsReport {
    let lines = input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| GpsLineResult {
            line_no: index + 1,
            raw: line.trim().to_string(),
            result: parse_coordinate(line),
        })
        .collect();
    GpsReport { lines }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_pair() {
        let coordinate = parse_coordinate(" 28.6139, 77.2090 ").unwrap();
        assert_eq!(coordinate.latitude, 28.6139);
        assert_eq!(coordinate.longitude, 77.2090);
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert_eq!(
            parse_coordinate("91, 10"),
            Err(GpsLineError::LatitudeOutOfRange(91.0))
        );
        assert_eq!(
            parse_coordinate("10, -180.5"),
            Err(GpsLineError::LongitudeOutOfRange(-180.5))
        );
    }

    #[test]
    fn rejects_malformed_lines() {
        assert_eq!(parse_coordinate("28.6"), Err(GpsLineError::Format));
        assert_eq!(parse_coordinate("1, 2, 3"), Err(GpsLineError::Format));
        assert_eq!(
            parse_coordinate("north, 77"),
            Err(GpsLineError::NotANumber("north".to_string()))
        );
        assert_eq!(
            parse_coordinate("NaN, 77"),
            Err(GpsLineError::NotANumber("NaN".to_string()))
        );
    }

    #[test]
    fn report_skips_blank_lines_and_keeps_line_numbers() {
        let report = check_coordinates("28.6139, 77.2090\n\n95, 10\n");
        assert_eq!(report.lines.len(), 2);
        assert_eq!(report.valid_count(), 1);
        assert_eq!(report.invalid_count(), 1);
        assert_eq!(report.lines[1].line_no, 3);
    }
}
