//! Error handling foundation for the pipewright workspace.
//!
//! Only the shared `Result` alias lives here. Each crate defines its own
//! domain error enums in its own error module; context is attached with
//! rootcause's `.context()` as errors cross layer boundaries.

use rootcause::Report;

/// Workspace-wide Result alias over rootcause's `Report`.
pub type Result<T, C = ()> = std::result::Result<T, Report<C>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_alias_is_usable() {
        let value: Result<&str> = Ok("ready");
        assert_eq!(value.expect("should be ok"), "ready");
    }
}
