// File: crates/linechart-widget/src/handle.rs
// Summary: Scoped drawing-backend handle: loaded on first use, reused after, released on teardown.

use linechart_core::DrawingBackend;
use tracing::info;

use crate::error::{Result, WidgetError};

/// One-time bootstrap of a drawing backend.
pub trait BackendLoader {
    type Backend: DrawingBackend;
    fn load(&mut self) -> anyhow::Result<Self::Backend>;
}

impl<B, F> BackendLoader for F
where
    B: DrawingBackend,
    F: FnMut() -> anyhow::Result<B>,
{
    type Backend = B;

    fn load(&mut self) -> anyhow::Result<B> {
        self()
    }
}

/// Holds at most one backend for the lifetime of a widget.
///
/// A failed load leaves the handle empty so the next render tries again.
pub struct BackendHandle<L: BackendLoader> {
    loader: L,
    backend: Option<L::Backend>,
    loads: usize,
}

impl<L: BackendLoader> BackendHandle<L> {
    pub fn new(loader: L) -> Self {
        Self { loader, backend: None, loads: 0 }
    }

    /// The backend, loading it first if this is the first call (or the first since release).
    pub fn acquire(&mut self) -> Result<&mut L::Backend> {
        let backend = match self.backend.take() {
            Some(b) => b,
            None => {
                let b = self.loader.load().map_err(WidgetError::BackendLoad)?;
                self.loads += 1;
                info!(loads = self.loads, "drawing backend acquired");
                b
            }
        };
        Ok(self.backend.insert(backend))
    }

    pub fn get(&self) -> Option<&L::Backend> {
        self.backend.as_ref()
    }

    pub fn get_mut(&mut self) -> Option<&mut L::Backend> {
        self.backend.as_mut()
    }

    pub fn is_loaded(&self) -> bool {
        self.backend.is_some()
    }

    /// How many times the loader has produced a backend.
    pub fn loads(&self) -> usize {
        self.loads
    }

    /// Drop the backend; returns it if one was held.
    pub fn release(&mut self) -> Option<L::Backend> {
        let released = self.backend.take();
        if released.is_some() {
            info!("drawing backend released");
        }
        released
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linechart_core::SvgBackend;

    #[test]
    fn loads_once_and_reuses() {
        let mut calls = 0;
        let mut handle = BackendHandle::new(|| {
            calls += 1;
            Ok::<_, anyhow::Error>(SvgBackend::new())
        });
        assert!(!handle.is_loaded());
        handle.acquire().unwrap();
        handle.acquire().unwrap();
        assert_eq!(handle.loads(), 1);
        assert!(handle.release().is_some());
        assert!(handle.release().is_none());
        handle.acquire().unwrap();
        assert_eq!(handle.loads(), 2);
        drop(handle);
        assert_eq!(calls, 2);
    }

    #[test]
    fn failed_load_is_retried() {
        let mut attempts = 0;
        let mut handle = BackendHandle::new(|| {
            attempts += 1;
            if attempts == 1 {
                anyhow::bail!("script not reachable");
            }
            Ok::<_, anyhow::Error>(SvgBackend::new())
        });
        let err = handle.acquire().err().unwrap();
        assert!(err.to_string().contains("script not reachable"));
        assert!(handle.acquire().is_ok());
        assert_eq!(handle.loads(), 1);
    }
}
