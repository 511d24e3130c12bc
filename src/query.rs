//! Building relative API paths with query parameters.

use log::debug;
use url::{form_urlencoded, Url};

use crate::{error::Result, util::maybe_split_once::MaybeSplitOnce};

// only used to check that a relative reference parses; never part of a built path
const PLACEHOLDER_BASE: &str = "http://placeholder.invalid/";

/// Appends the given query parameters to a relative path.
///
/// Parameters with an empty name or an empty value are left out entirely, which is how optional parameters such as an
/// unset market vanish from a request. Any query already present in the path is kept in front of the new parameters.
/// Ordering of the parameters is otherwise not significant to the API.
///
/// Returns a basic error if the path isn't a valid URL reference.
///
/// ```
/// # use spotibind::query::with_query_parameters;
/// let path = with_query_parameters("albums/4aawyAB9vmqN3uQ7FjRGTy", [("market", "FI"), ("locale", "")]).unwrap();
/// assert_eq!(path, "albums/4aawyAB9vmqN3uQ7FjRGTy?market=FI");
/// ```
pub fn with_query_parameters<'a, I>(path: &str, params: I) -> Result<String>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    Url::parse(PLACEHOLDER_BASE)?.join(path)?;

    let (path, existing_query) = path.maybe_split_once('?');
    let mut serializer = form_urlencoded::Serializer::new(String::new());

    if let Some(existing_query) = existing_query {
        serializer.extend_pairs(form_urlencoded::parse(existing_query.as_bytes()));
    }

    serializer.extend_pairs(
        params
            .into_iter()
            .filter(|(name, value)| !name.is_empty() && !value.is_empty()),
    );

    let query = serializer.finish();
    let built = if query.is_empty() {
        path.to_owned()
    } else {
        format!("{path}?{query}")
    };

    debug!("Built request path: {built}");
    Ok(built)
}
