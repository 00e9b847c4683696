//! Leptos Modal Host
//!
//! One shared overlay container in `document.body` plus a portal component
//! that renders modal content into it.
//!
//! The container is created by an explicit startup call to [`ensure_host`],
//! which is idempotent: calling it again returns the existing element instead
//! of appending a second one.

use std::fmt;

use leptos::portal::Portal;
use leptos::prelude::*;
use thiserror::Error;

/// Host container id used when the app does not configure one
pub const DEFAULT_HOST_ID: &str = "modal-root";

/// Errors raised while locating or creating the host container
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HostError {
    #[error("modal host id must not be empty")]
    EmptyId,
    #[error("modal host id must not contain whitespace: {0:?}")]
    InvalidId(String),
    #[error("no browser window available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("DOM call failed: {0}")]
    Dom(String),
}

/// Validated DOM id of the host container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostId(String);

impl HostId {
    pub fn new(id: impl Into<String>) -> Result<Self, HostError> {
        let id = id.into();
        if id.is_empty() {
            return Err(HostError::EmptyId);
        }
        if id.chars().any(char::is_whitespace) {
            return Err(HostError::InvalidId(id));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for HostId {
    fn default() -> Self {
        Self(DEFAULT_HOST_ID.to_string())
    }
}

impl fmt::Display for HostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Look up an existing host container
pub fn find_host(id: &HostId) -> Option<web_sys::Element> {
    web_sys::window()?.document()?.get_element_by_id(id.as_str())
}

/// How [`mount_once`] obtained the container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mounted {
    Reused,
    Created,
}

/// Return `existing` if present, otherwise build a new container with `create`.
///
/// `create` runs at most once per call and never when a container exists.
pub fn mount_once<E>(
    existing: Option<E>,
    create: impl FnOnce() -> Result<E, HostError>,
) -> Result<(E, Mounted), HostError> {
    match existing {
        Some(element) => Ok((element, Mounted::Reused)),
        None => create().map(|element| (element, Mounted::Created)),
    }
}

/// Create the host container under `document.body` unless it already exists.
///
/// Returns the container either way.
pub fn ensure_host(id: &HostId) -> Result<web_sys::Element, HostError> {
    let document = web_sys::window()
        .ok_or(HostError::NoWindow)?
        .document()
        .ok_or(HostError::NoDocument)?;

    let (host, mounted) = mount_once(document.get_element_by_id(id.as_str()), || {
        let body = document.body().ok_or(HostError::NoBody)?;
        let host = document.create_element("div").map_err(dom_error)?;
        host.set_id(id.as_str());
        body.append_child(&host).map_err(dom_error)?;
        Ok(host)
    })?;

    match mounted {
        Mounted::Reused => log::debug!("[HOST] Reusing modal host #{}", id),
        Mounted::Created => log::info!("[HOST] Created modal host #{}", id),
    }
    Ok(host)
}

fn dom_error(err: wasm_bindgen::JsValue) -> HostError {
    HostError::Dom(format!("{:?}", err))
}

/// Overlay rendered into the host container while `visible` is true.
///
/// Renders nothing when the host container is missing. Clicks on the
/// backdrop (outside the panel) run `on_backdrop`.
#[component]
pub fn ModalPortal(
    host_id: HostId,
    #[prop(into)] visible: Signal<bool>,
    #[prop(into, optional)] on_backdrop: Option<Callback<()>>,
    #[prop(into, optional)] panel_class: Option<String>,
    children: ChildrenFn,
) -> impl IntoView {
    // Only remount the portal when visibility flips
    let visible = Memo::new(move |_| visible.get());
    let children = StoredValue::new(children);
    let panel_class = panel_class.unwrap_or_else(|| "modal-panel".to_string());

    move || {
        if !visible.get() {
            return None;
        }
        let Some(host) = find_host(&host_id) else {
            log::warn!("[HOST] Modal host #{} not found, skipping overlay", host_id);
            return None;
        };
        let panel_class = panel_class.clone();

        Some(view! {
            <Portal mount=host>
                <div
                    class="modal-backdrop"
                    on:click=move |_| {
                        if let Some(cb) = on_backdrop {
                            cb.run(());
                        }
                    }
                >
                    <div
                        class=panel_class.clone()
                        on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()
                    >
                        {children.with_value(|children| children())}
                    </div>
                </div>
            </Portal>
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_host_id_default() {
        assert_eq!(HostId::default().as_str(), "modal-root");
    }

    #[test]
    fn test_host_id_rejects_empty() {
        assert_eq!(HostId::new(""), Err(HostError::EmptyId));
    }

    #[test]
    fn test_host_id_rejects_whitespace() {
        assert_eq!(
            HostId::new("modal root"),
            Err(HostError::InvalidId("modal root".to_string()))
        );
    }

    /// Stand-in for `document.body`: a list of container ids
    fn mount_into(body: &mut Vec<String>, id: &HostId) -> Result<Mounted, HostError> {
        let existing = body.iter().position(|child| child == id.as_str());
        let (_, mounted) = mount_once(existing, || {
            body.push(id.to_string());
            Ok(body.len() - 1)
        })?;
        Ok(mounted)
    }

    #[test]
    fn test_mount_once_creates_a_single_container() {
        let id = HostId::default();
        let mut body = vec!["app".to_string()];

        assert_eq!(mount_into(&mut body, &id), Ok(Mounted::Created));
        assert_eq!(mount_into(&mut body, &id), Ok(Mounted::Reused));
        assert_eq!(mount_into(&mut body, &id), Ok(Mounted::Reused));

        let hosts = body.iter().filter(|child| *child == "modal-root").count();
        assert_eq!(hosts, 1);
        assert_eq!(body.len(), 2);
    }

    #[test]
    fn test_mount_once_skips_create_when_present() {
        let result = mount_once(Some("existing"), || -> Result<&'static str, HostError> {
            panic!("create must not run when a container exists")
        });
        assert_eq!(result, Ok(("existing", Mounted::Reused)));
    }

    #[test]
    fn test_mount_once_propagates_create_error() {
        let result = mount_once(None::<()>, || Err(HostError::NoBody));
        assert_eq!(result, Err(HostError::NoBody));
    }

    #[test]
    fn test_host_id_display() {
        let id = HostId::new("overlay").unwrap();
        assert_eq!(id.to_string(), "overlay");
    }
}
