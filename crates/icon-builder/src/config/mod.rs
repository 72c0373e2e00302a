mod behaviour_config;
#[allow(clippy::module_inception)]
mod config;
mod host_config;
mod logging_config;
mod status_config;

pub(crate) use {
    behaviour_config::BehaviourConfig, config::Config, host_config::HostConfig,
    logging_config::LoggingConfig, status_config::StatusConfig,
};

pub(crate) const DEFAULT_HOST_PROGRAM: &str = "icon-builder-host";
pub(crate) const DEFAULT_OPEN_OUTPUT_ON_DONE: bool = false;
pub(crate) const DEFAULT_LOG_FILTER: &str = "icon_builder=debug,icon_builder_core=debug";
pub(crate) const DEFAULT_LOG_FILE_NAME: &str = "icon-builder.log";

pub(crate) fn default_open_output_on_done() -> bool {
    DEFAULT_OPEN_OUTPUT_ON_DONE
}

pub(crate) fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

pub(crate) fn default_log_file_name() -> String {
    DEFAULT_LOG_FILE_NAME.to_string()
}
