//! File Upload
//!
//! Multipart upload over `XMLHttpRequest` so byte-level progress is visible.
//! Validation happens before any request is built.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, ProgressEvent, XmlHttpRequest};

use super::client::{paths, ApiClient};
use crate::error::{ApiError, ApiResult};
use crate::models::{FileRecord, Person};
use crate::session::KeyValueStore;

/// Why an upload was refused locally
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadRejected {
    NoPerson,
    NoFile,
}

impl UploadRejected {
    pub fn message(&self) -> &'static str {
        match self {
            UploadRejected::NoPerson => "Select a person first",
            UploadRejected::NoFile => "Choose a file",
        }
    }
}

/// A validated upload, ready to send
#[derive(Debug, Clone, PartialEq)]
pub struct UploadJob<F> {
    pub person_id: u32,
    pub file: F,
    pub description: Option<String>,
}

/// Check the form state; the person is checked before the file
pub fn prepare_upload<F>(person: Option<&Person>, file: Option<F>, description: &str) -> Result<UploadJob<F>, UploadRejected> {
    let person = person.ok_or(UploadRejected::NoPerson)?;
    let file = file.ok_or(UploadRejected::NoFile)?;
    Ok(UploadJob {
        person_id: person.id,
        file,
        description: if description.is_empty() { None } else { Some(description.to_string()) },
    })
}

/// Transferred fraction in `[0, 1]`, when the total is known
pub fn progress_fraction(loaded: f64, total: f64, length_computable: bool) -> Option<f64> {
    if !length_computable || total <= 0.0 {
        return None;
    }
    Some((loaded / total).clamp(0.0, 1.0))
}

/// Width of the progress bar in whole percent
pub fn percent(fraction: f64) -> u32 {
    (fraction * 100.0).round() as u32
}

fn js_error(e: JsValue) -> ApiError {
    ApiError::Browser(format!("{:?}", e))
}

/// Where an upload for one person goes, and the credential it carries
#[derive(Debug, Clone, PartialEq)]
pub struct UploadTarget {
    pub url: String,
    pub bearer: Option<String>,
}

pub fn upload_target<T, K: KeyValueStore>(client: &ApiClient<T, K>, person_id: u32) -> UploadTarget {
    UploadTarget {
        url: client.config().url(&paths::person_upload(person_id)),
        bearer: client.session().token().map(|token| format!("Bearer {}", token)),
    }
}

/// Send `job` and report progress fractions to `on_progress`.
/// Non-2xx resolves to `ApiError::Upload`; the error body is not read.
pub async fn upload_file<T, K: KeyValueStore>(
    client: &ApiClient<T, K>,
    job: UploadJob<web_sys::File>,
    on_progress: impl Fn(f64) + 'static,
) -> ApiResult<Option<FileRecord>> {
    let form = FormData::new().map_err(js_error)?;
    form.append_with_blob_and_filename("file", &job.file, &job.file.name())
        .map_err(js_error)?;
    if let Some(description) = &job.description {
        form.append_with_str("description", description).map_err(js_error)?;
    }

    let target = upload_target(client, job.person_id);
    let xhr = XmlHttpRequest::new().map_err(js_error)?;
    xhr.open("POST", &target.url).map_err(js_error)?;
    if let Some(bearer) = &target.bearer {
        xhr.set_request_header("Authorization", bearer).map_err(js_error)?;
    }

    let progress_cb = Closure::<dyn FnMut(ProgressEvent)>::new(move |ev: ProgressEvent| {
        if let Some(fraction) = progress_fraction(ev.loaded(), ev.total(), ev.length_computable()) {
            on_progress(fraction);
        }
    });
    let upload = xhr.upload().map_err(js_error)?;
    upload.set_onprogress(Some(progress_cb.as_ref().unchecked_ref()));

    // Every terminal event settles the promise; status tells them apart
    let mut resolver = None;
    let settled = js_sys::Promise::new(&mut |resolve, _reject| resolver = Some(resolve));
    let resolve = resolver.ok_or_else(|| ApiError::Browser("promise executor did not run".into()))?;
    let settle = Closure::<dyn FnMut()>::new(move || {
        let _ = resolve.call0(&JsValue::NULL);
    });
    let settle_fn: Option<&js_sys::Function> = Some(settle.as_ref().unchecked_ref());
    xhr.set_onload(settle_fn);
    xhr.set_onerror(settle_fn);
    xhr.set_onabort(settle_fn);
    xhr.set_ontimeout(settle_fn);

    log::debug!("POST {} (multipart)", target.url);
    xhr.send_with_opt_form_data(Some(&form)).map_err(js_error)?;
    let _ = JsFuture::from(settled).await;

    upload.set_onprogress(None);
    xhr.set_onload(None);
    xhr.set_onerror(None);
    xhr.set_onabort(None);
    xhr.set_ontimeout(None);
    drop(progress_cb);
    drop(settle);

    let status = xhr.status().map_err(js_error)?;
    log::debug!("POST {} -> {}", target.url, status);
    match status {
        0 => Err(ApiError::Network("upload did not complete".into())),
        200..=299 => {
            let body = xhr.response_text().ok().flatten().unwrap_or_default();
            Ok(serde_json::from_str(&body).ok())
        }
        other => Err(ApiError::Upload(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use crate::session::{MemoryStore, Session};

    fn person() -> Person {
        Person {
            id: 11,
            person_name: "Grandpa".into(),
            category_id: 1,
            created_at: None,
        }
    }

    #[test]
    fn test_no_file_is_rejected() {
        let err = prepare_upload::<&str>(Some(&person()), None, "notes").unwrap_err();
        assert_eq!(err, UploadRejected::NoFile);
        assert_eq!(err.message(), "Choose a file");
    }

    #[test]
    fn test_person_checked_before_file() {
        let err = prepare_upload::<&str>(None, None, "").unwrap_err();
        assert_eq!(err, UploadRejected::NoPerson);
    }

    #[test]
    fn test_job_targets_person() {
        let job = prepare_upload(Some(&person()), Some("letter.jpg"), "").unwrap();
        assert_eq!(job.person_id, 11);
        assert_eq!(job.file, "letter.jpg");
        assert_eq!(job.description, None);

        let job = prepare_upload(Some(&person()), Some("letter.jpg"), "1962, Lisbon").unwrap();
        assert_eq!(job.description.as_deref(), Some("1962, Lisbon"));
    }

    #[test]
    fn test_upload_target_carries_token() {
        let client = ApiClient::new(ApiConfig::new("https://memoir.example/"), (), MemoryStore::new());
        assert_eq!(
            upload_target(&client, 11),
            UploadTarget { url: "https://memoir.example/home/person/11/upload".into(), bearer: None }
        );

        client
            .session()
            .persist(&Session { token: "t1".into(), username: None, user_id: Some(7) })
            .unwrap();
        assert_eq!(upload_target(&client, 11).bearer.as_deref(), Some("Bearer t1"));
    }

    #[test]
    fn test_progress() {
        assert_eq!(progress_fraction(50.0, 200.0, true), Some(0.25));
        assert_eq!(progress_fraction(50.0, 200.0, false), None);
        assert_eq!(progress_fraction(10.0, 0.0, true), None);
        assert_eq!(percent(0.256), 26);
        assert_eq!(percent(1.0), 100);
    }
}
