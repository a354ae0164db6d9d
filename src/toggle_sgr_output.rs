/*
 *   Copyright (c) 2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

use std::sync::atomic::{AtomicBool, Ordering};

/// Global variable which gates all SGR rendering in this crate. When disabled,
/// every color value renders as the empty string, so no escape bytes ever
/// reach the output.
///
/// This is a global variable because every render call in the process has to
/// agree on it; there is no per-value override. It starts out enabled.
pub mod global_sgr_output {
    use super::*;

    static SGR_OUTPUT_ENABLED: AtomicBool = AtomicBool::new(true);

    /// Turn escape-sequence output back on (the initial state).
    pub fn enable() { set_enabled(true); }

    /// Turn escape-sequence output off. Every subsequent render produces `""`.
    pub fn disable() { set_enabled(false); }

    /// Set the switch explicitly. This is process-wide state.
    ///
    /// # Testing support
    ///
    /// The [serial_test](https://crates.io/crates/serial_test) crate is used to
    /// test this function. In any test in which this function is called, please
    /// use the `#[serial]` attribute to annotate that test. Otherwise there
    /// will be flakiness in the test results (tests are run in parallel using
    /// many threads).
    pub fn set_enabled(arg_enabled: bool) {
        SGR_OUTPUT_ENABLED.store(arg_enabled, Ordering::SeqCst);
    }

    /// Read by every render call before any escape bytes are written.
    pub fn is_enabled() -> bool { SGR_OUTPUT_ENABLED.load(Ordering::SeqCst) }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    #[test]
    #[serial]
    fn cycle_1() {
        global_sgr_output::enable();
        assert!(global_sgr_output::is_enabled());
    }

    #[test]
    #[serial]
    fn cycle_2() {
        global_sgr_output::disable();
        assert!(!global_sgr_output::is_enabled());
        global_sgr_output::enable();
    }

    #[test]
    #[serial]
    fn cycle_3() {
        global_sgr_output::set_enabled(false);
        assert!(!global_sgr_output::is_enabled());
        global_sgr_output::set_enabled(true);
        assert!(global_sgr_output::is_enabled());
    }
}
