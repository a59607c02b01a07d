//! Local task spawning.
//!
//! Browser builds (`csr`) drive futures on the page's event loop via
//! `leptos::task::spawn_local`. Native builds have no event loop to attach to,
//! so the future is dropped unpolled.

use std::future::Future;

/// Run `fut` on the browser event loop.
pub fn spawn<F>(fut: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(fut);
    #[cfg(not(feature = "csr"))]
    drop(fut);
}
