//! System clipboard access

use std::{future::Future, sync::Arc};
use tracing::{debug, info};

use crate::{
    error::{PadError, PadResult},
    state::{AppState, Notification},
};

/// Put `text` on the system clipboard
pub async fn set_clipboard_text(text: String) -> PadResult<()> {
    debug!("Copying {} bytes to the clipboard", text.len());

    // arboard talks to the display server synchronously
    tokio::task::spawn_blocking(move || {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| PadError::Clipboard(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| PadError::Clipboard(e.to_string()))
    })
    .await
    .map_err(|e| PadError::Clipboard(format!("clipboard task failed: {}", e)))?
}

/// Copy the active document to the clipboard and notify the host on success
pub async fn copy_active_document(state: Arc<AppState>) -> PadResult<String> {
    copy_active_document_with(state, set_clipboard_text).await
}

/// Copy the active document through `copy`, raising the "copied" notification
/// only when it succeeds
pub async fn copy_active_document_with<F, Fut>(state: Arc<AppState>, copy: F) -> PadResult<String>
where
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = PadResult<()>>,
{
    let (name, content) = state.read_documents(|store| {
        let doc = store.active();
        (doc.name.clone(), doc.content.clone())
    })?;

    copy(content).await?;
    info!("Copied {} to the clipboard", name);
    state.notify(Notification::copied())?;

    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use crate::state::NotificationKind;

    fn state() -> Arc<AppState> {
        Arc::new(AppState::new(0, "127.0.0.1".to_string(), 1))
    }

    #[tokio::test]
    async fn test_copy_sends_active_content_and_notifies() {
        let state = state();
        state
            .with_documents("edit", |store| {
                store.set_active_content("int x = 1;");
                Ok(())
            })
            .unwrap();

        let sink = Arc::new(Mutex::new(None));
        let captured = Arc::clone(&sink);
        let name = copy_active_document_with(Arc::clone(&state), |text| async move {
            *captured.lock().unwrap() = Some(text);
            Ok(())
        })
        .await
        .unwrap();

        assert_eq!(name, "Main.java");
        assert_eq!(sink.lock().unwrap().as_deref(), Some("int x = 1;"));

        let notifications = state.take_notifications().unwrap();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].kind, NotificationKind::Copied);
        assert_eq!(notifications[0].message, "Code copied to clipboard!");
    }

    #[tokio::test]
    async fn test_failed_copy_does_not_notify() {
        let state = state();
        let result = copy_active_document_with(Arc::clone(&state), |_| async {
            Err(PadError::Clipboard("no display".to_string()))
        })
        .await;

        assert_eq!(result, Err(PadError::Clipboard("no display".to_string())));
        assert_eq!(state.pending_notifications(), Ok(0));
    }
}
