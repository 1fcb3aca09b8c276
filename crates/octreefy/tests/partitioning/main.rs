mod partition_properties;
mod scenarios;
mod sinks;
mod util;
