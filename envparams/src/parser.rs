use crate::BoxError;

/// Return type for functions that can be used with
/// [`Registry::get_with`](crate::Registry::get_with).
pub type ParserResult<T> = Result<T, BoxError>;

pub trait Parser<T> {
    fn parse(&self, s: &str) -> ParserResult<T>;
}

pub fn from_str<T>(s: &str) -> ParserResult<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    s.parse::<T>().map_err(|e| e.into())
}

pub fn into<T>(s: &str) -> ParserResult<T>
where
    T: From<String>,
{
    Ok(s.to_owned().into())
}

/// Case-insensitive match against `true`, `1`, `yes` and `on`.
///
/// Anything else, the empty string included, is `false`. This never fails.
pub fn lenient_bool(s: &str) -> ParserResult<bool> {
    Ok(is_truthy(s))
}

pub(crate) fn is_truthy(s: &str) -> bool {
    matches!(s.to_lowercase().as_str(), "true" | "1" | "yes" | "on")
}

pub(crate) fn is_falsy(s: &str) -> bool {
    matches!(s.to_lowercase().as_str(), "" | "false" | "0" | "no" | "off")
}

impl<T, F> Parser<T> for F
where
    F: for<'a> Fn(&'a str) -> ParserResult<T>,
{
    fn parse(&self, s: &str) -> ParserResult<T> {
        (self)(s)
    }
}
