pub mod resolver_args;

pub use resolver_args::DnsmasqArguments;
