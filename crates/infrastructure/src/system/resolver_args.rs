use ferrous_ftl_application::ports::ResolverArguments;

/// Command line handed to the embedded resolver when it is started.
///
/// Slot 0 is the program name, slot 1 keeps the resolver in the
/// foreground. Slot 2 is reserved for the debug switch and stays empty
/// unless debug logging is requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsmasqArguments {
    args: Vec<String>,
}

impl DnsmasqArguments {
    pub fn new() -> Self {
        Self {
            args: vec!["dnsmasq".to_string(), "-k".to_string(), String::new()],
        }
    }

    /// Arguments to launch with, reserved empty slots skipped
    pub fn command_line(&self) -> Vec<&str> {
        self.args
            .iter()
            .map(String::as_str)
            .filter(|arg| !arg.is_empty())
            .collect()
    }
}

impl Default for DnsmasqArguments {
    fn default() -> Self {
        Self::new()
    }
}

impl ResolverArguments for DnsmasqArguments {
    fn set(&mut self, index: usize, value: &str) {
        if self.args.len() <= index {
            self.args.resize(index + 1, String::new());
        }
        self.args[index] = value.to_string();
    }

    fn get(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }
}
