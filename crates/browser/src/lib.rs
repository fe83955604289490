//! Browser-side handoff for encoded files.
//!
//! Builds the `data:` URI and the anchor-click script that triggers a
//! same-origin download, and drives the progress sink over the final
//! 90–100% tail. All functions here are pure string construction; the
//! only side effect is the caller-supplied script injector.

use notebridge_progress::ProgressUpdate;
use notebridge_stream::EncodedFile;

/// Builds a `data:<mime>;base64,<payload>` URI.
pub fn data_uri(mime_type: &str, payload: &str) -> String {
    format!("data:{mime_type};base64,{payload}")
}

/// Returns `s` as a quoted, escaped JavaScript string literal.
///
/// JSON string escaping is a strict subset of JS, so file names with
/// quotes, backslashes or control characters embed safely.
pub fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".into())
}

/// Builds the script that downloads `file` via a transient anchor click.
pub fn download_script(file: &EncodedFile) -> String {
    let uri = data_uri(&file.mime_type, &file.payload);
    let name = js_string(&file.file_name);
    format!(
        "var a = document.createElement('a');\n\
         a.href = {};\n\
         a.download = {name};\n\
         document.body.appendChild(a);\n\
         a.click();\n\
         document.body.removeChild(a);\n",
        js_string(&uri)
    )
}

/// Hands the download script to `inject` and completes the progress band.
///
/// `inject` is whatever the front end uses to run a script in the
/// browser (e.g. a notebook display hook). Once it returns, the sink is
/// driven to 100% / success; nothing is emitted before the injection, so
/// a failed encode never leaves a success state behind.
pub fn deliver(
    file: &EncodedFile,
    mut inject: impl FnMut(&str),
    mut on_progress: impl FnMut(ProgressUpdate),
) {
    let script = download_script(file);
    inject(&script);
    on_progress(ProgressUpdate::success());
}
