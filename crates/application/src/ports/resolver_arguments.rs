/// Slot of the resolver command line reserved for the debug switch
pub const LOG_DEBUG_SLOT: usize = 2;

pub const LOG_DEBUG_ARGUMENT: &str = "--log-debug";

/// Launch arguments of the embedded resolver process.
///
/// The config layer only ever writes to it; the resolver reads the list when
/// it is started.
pub trait ResolverArguments {
    fn set(&mut self, index: usize, value: &str);

    fn get(&self, index: usize) -> Option<&str>;

    fn enable_debug_logging(&mut self) {
        self.set(LOG_DEBUG_SLOT, LOG_DEBUG_ARGUMENT);
    }
}
