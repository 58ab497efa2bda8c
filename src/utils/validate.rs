use once_cell::sync::Lazy;
use regex::Regex;

static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://[^\s/$.?#][^\s]*$").expect("Invalid url regex"));

static EXTERNAL_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^,\s][^,]*$").expect("Invalid external name regex"));

pub fn validate_url(url: &str) -> Result<(), &'static str> {
    // 空链接表示未设置
    if url.is_empty() {
        return Ok(());
    }
    if !URL_RE.is_match(url) {
        return Err("Link must be an absolute http(s) URL");
    }
    Ok(())
}

pub fn validate_external_name(name: &str) -> Result<(), &'static str> {
    if name.trim().is_empty() {
        return Err("External assignment name is required");
    }
    // 逗号在 webservice 中用作用户名分隔符，名称里不允许出现
    if !EXTERNAL_NAME_RE.is_match(name) {
        return Err("External assignment name must not contain commas or start with whitespace");
    }
    Ok(())
}

pub fn validate_grade_max(value: f64) -> Result<(), &'static str> {
    if !value.is_finite() || value < 0.0 {
        return Err("Maximum grade must be a non-negative number");
    }
    Ok(())
}

pub fn validate_percentage(value: f64) -> Result<(), &'static str> {
    if !(0.0..=100.0).contains(&value) {
        return Err("Passing percentage must be between 0 and 100");
    }
    Ok(())
}

/// 分数必须落在 [0, max] 区间
pub fn validate_grade_in_range(value: f64, max: f64) -> Result<(), &'static str> {
    if !value.is_finite() || value < 0.0 || value > max {
        return Err("Grade must be between 0 and the maximum grade");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("").is_ok());
        assert!(validate_url("https://github.com/org/hw1-alice").is_ok());
        assert!(validate_url("ftp://example.com").is_err());
        assert!(validate_url("not a url").is_err());
    }

    #[test]
    fn test_validate_external_name() {
        assert!(validate_external_name("HW1").is_ok());
        assert!(validate_external_name("Week 3 Loops").is_ok());
        assert!(validate_external_name("").is_err());
        assert!(validate_external_name("a,b").is_err());
    }

    #[test]
    fn test_numeric_bounds() {
        assert!(validate_grade_max(0.0).is_ok());
        assert!(validate_grade_max(-1.0).is_err());
        assert!(validate_grade_max(f64::NAN).is_err());
        assert!(validate_percentage(100.0).is_ok());
        assert!(validate_percentage(100.5).is_err());
        assert!(validate_grade_in_range(10.0, 10.0).is_ok());
        assert!(validate_grade_in_range(10.5, 10.0).is_err());
        assert!(validate_grade_in_range(-0.5, 10.0).is_err());
    }
}
