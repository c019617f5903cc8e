//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# AyurSutra Assistant Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.
#
# The completion API key is never read from this file. Export
# AYURSUTRA_API_KEY (or GEMINI_API_KEY), or put it in a .env file.

[assistant]
# model = "gemini-2.0-flash"
# api_base = "https://generativelanguage.googleapis.com/v1beta/models"
# temperature = 0.7          # 0.0-2.0
# top_k = 40                 # 1-100
# top_p = 0.95               # 0.0-1.0
# max_output_tokens = 1024   # 1-8192
# connect_timeout = 10       # seconds, 1-60
# request_timeout = 60       # seconds, 1-600

[persona]
# name = "AyurSutra Assistant"
# greeting = "Hello! I'm AyurSutra Assistant. How can I help you today?"
# preamble = """
# You are AyurSutra Assistant, a helpful and knowledgeable chatbot ...
# """

[panel]
# initial_x = 20.0
# initial_y = 100.0

[logging]
# level = "INFO"             # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
