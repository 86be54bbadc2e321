use bitflags::bitflags;

bitflags! {
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct AgendaOptions: u64 {
        /// Are we on light theme?
        const LightTheme = 1 << 0;

        /// Debug controls, navigation bar
        const Debug = 1 << 1;

        /// Simulate is_compiled_as_mobile ?
        const Mobile = 1 << 2;
    }
}

impl Default for AgendaOptions {
    fn default() -> Self {
        AgendaOptions::LightTheme
    }
}
