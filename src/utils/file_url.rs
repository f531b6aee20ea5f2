//! URL transforms between the transport's raw file URLs and the
//! application's public URL form.
//!
//! Raw URLs arrive as `https://<host>/f/<key>`; the public form scopes
//! the key under the application id: `https://<host>/a/<app_id>/<key>`.

/// Rewrite a raw file URL into its public form by replacing the first
/// literal `/f/` segment with `/a/<app_id>/`.
pub fn public_url(raw_url: &str, app_id: &str) -> String {
    raw_url.replacen("/f/", &format!("/a/{}/", app_id), 1)
}

/// Extract the transport's deletion key from a public URL by stripping
/// everything up to and including `/a/<app_id>/`.
/// Returns None when the URL does not carry the app segment.
pub fn deletion_key<'a>(public_url: &'a str, app_id: &str) -> Option<&'a str> {
    let marker = format!("/a/{}/", app_id);
    let start = public_url.find(&marker)? + marker.len();
    Some(&public_url[start..])
}
