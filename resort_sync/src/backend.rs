// Copyright 2025 the Resort Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drag-library seam.
//!
//! The synchronizer never talks to a concrete drag library; it pushes
//! configuration through [`DragBackend`] and receives callbacks as
//! [`DragEvent`](crate::DragEvent)s. Host glue implements the trait over
//! whatever actually moves nodes (a JS sortable via FFI, a native pointer
//! handler, a test double).

use alloc::string::String;

use crate::group::Group;
use crate::options::is_reserved;
use crate::outcome::OptionValue;

/// A live drag-library instance attached to one container.
pub trait DragBackend {
    /// Backend-specific failure type.
    type Error;

    /// Sets a named option (names are camel-cased by the caller).
    fn set_option(&mut self, name: &str, value: &OptionValue) -> Result<(), Self::Error>;

    /// Applies the container's drag group configuration.
    fn set_group(&mut self, group: &Group) -> Result<(), Self::Error>;

    /// Releases the instance. Called at most once, on unmount.
    fn destroy(&mut self) -> Result<(), Self::Error>;
}

/// Pushes a full option list plus group configuration to a backend.
pub fn apply_options<B: DragBackend>(
    backend: &mut B,
    pairs: &[(String, OptionValue)],
    group: Option<&Group>,
) -> Result<(), B::Error> {
    for (name, value) in pairs {
        backend.set_option(name, value)?;
    }
    if let Some(group) = group {
        backend.set_group(group)?;
    }
    Ok(())
}

/// Re-pushes changed options, skipping the reserved callback slots the
/// synchronizer owns.
pub fn update_options<B: DragBackend>(
    backend: &mut B,
    pairs: &[(String, OptionValue)],
) -> Result<(), B::Error> {
    for (name, value) in pairs {
        if !is_reserved(name) {
            backend.set_option(name, value)?;
        }
    }
    Ok(())
}

/// Best-effort teardown: destroys the backend if one is still present and
/// swallows any failure. Unmount must never fail the host's teardown
/// sequence, even when the instance is already gone.
pub fn release<B: DragBackend>(backend: Option<&mut B>) {
    if let Some(backend) = backend {
        let _ = backend.destroy();
    }
}

/// A backend that accepts everything and does nothing.
///
/// Useful for headless hosts and tests; the synchronizer's reconciliation
/// logic is exercised entirely through its event entry points.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoopBackend;

impl DragBackend for NoopBackend {
    type Error = core::convert::Infallible;

    fn set_option(&mut self, _name: &str, _value: &OptionValue) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_group(&mut self, _group: &Group) -> Result<(), Self::Error> {
        Ok(())
    }

    fn destroy(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::{String, ToString};
    use alloc::vec;
    use alloc::vec::Vec;

    /// Records every call; `fail_destroy` simulates a backend that is broken
    /// at teardown time.
    #[derive(Default)]
    struct Recording {
        options: Vec<(String, OptionValue)>,
        groups: Vec<String>,
        destroyed: bool,
        fail_destroy: bool,
    }

    impl DragBackend for Recording {
        type Error = &'static str;

        fn set_option(&mut self, name: &str, value: &OptionValue) -> Result<(), Self::Error> {
            self.options.push((name.to_string(), value.clone()));
            Ok(())
        }

        fn set_group(&mut self, group: &Group) -> Result<(), Self::Error> {
            self.groups.push(group.name().to_string());
            Ok(())
        }

        fn destroy(&mut self) -> Result<(), Self::Error> {
            self.destroyed = true;
            if self.fail_destroy { Err("destroy failed") } else { Ok(()) }
        }
    }

    #[test]
    fn apply_pushes_options_then_group() {
        let mut backend = Recording::default();
        let pairs = vec![("disabled".to_string(), OptionValue::Bool(false))];
        apply_options(&mut backend, &pairs, Some(&Group::named("g"))).unwrap();
        assert_eq!(backend.options.len(), 1);
        assert_eq!(backend.groups, vec!["g".to_string()]);
    }

    #[test]
    fn update_skips_reserved_callback_slots() {
        let mut backend = Recording::default();
        let pairs = vec![
            ("onStart".to_string(), OptionValue::Bool(true)),
            ("animation".to_string(), OptionValue::Int(150)),
        ];
        update_options(&mut backend, &pairs).unwrap();
        assert_eq!(backend.options.len(), 1);
        assert_eq!(backend.options[0].0, "animation");
    }

    #[test]
    fn release_swallows_destroy_failures() {
        let mut backend = Recording {
            fail_destroy: true,
            ..Recording::default()
        };
        release(Some(&mut backend));
        assert!(backend.destroyed);
    }

    #[test]
    fn release_with_no_backend_is_harmless() {
        release::<Recording>(None);
    }
}
