//! CLI argument definitions using clap
//!
//! - zowe session [connection flags]   # Resolve and print a session
//! - zowe proxy [connection flags]     # Explain the proxy decision for a host

use clap::{Args, Parser, Subcommand, ValueEnum};
use zowe_core::session::{AuthType, CommandArgs, TopDefaultAuth};

#[derive(Parser, Debug)]
#[command(name = "zowe")]
#[command(about = "Resolve z/OSMF session credentials and proxy settings")]
#[command(version)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Complete a session from flags, environment and prompts, then pick
    /// its authentication method
    #[command(verbatim_doc_comment)]
    Session(SessionArgs),

    /// Show whether requests for a session go through a proxy
    #[command(verbatim_doc_comment)]
    Proxy(ProxyArgs),
}

/// Connection flags shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct ConnectionArgs {
    /// Host name of the service
    #[arg(long, short = 'H')]
    pub host: Option<String>,

    /// Port of the service
    #[arg(long, short = 'P')]
    pub port: Option<String>,

    /// Protocol used to reach the service
    #[arg(long, value_parser = ["http", "https"])]
    pub protocol: Option<String>,

    /// Reject self-signed certificates
    #[arg(long)]
    pub reject_unauthorized: Option<bool>,

    /// Path prepended to every request, for example an API gateway route
    #[arg(long)]
    pub base_path: Option<String>,

    /// User name for basic authentication
    #[arg(long, short = 'u')]
    pub user: Option<String>,

    /// Password for basic authentication
    #[arg(long)]
    pub password: Option<String>,

    /// Type of the token in --token-value
    #[arg(long)]
    pub token_type: Option<String>,

    /// Token for token or bearer authentication
    #[arg(long)]
    pub token_value: Option<String>,

    /// PEM certificate file
    #[arg(long)]
    pub cert_file: Option<String>,

    /// Private key of --cert-file
    #[arg(long)]
    pub cert_key_file: Option<String>,

    /// Comma-separated authentication order, e.g. "token,basic"
    #[arg(long)]
    pub auth_order: Option<String>,
}

impl ConnectionArgs {
    /// Flags as command arguments, omitting those not given
    pub fn to_command_args(&self) -> CommandArgs {
        let mut args = CommandArgs::new();
        let strings = [
            ("host", &self.host),
            ("port", &self.port),
            ("protocol", &self.protocol),
            ("basePath", &self.base_path),
            ("user", &self.user),
            ("password", &self.password),
            ("tokenType", &self.token_type),
            ("tokenValue", &self.token_value),
            ("certFile", &self.cert_file),
            ("certKeyFile", &self.cert_key_file),
            ("authOrder", &self.auth_order),
        ];
        for (name, value) in strings {
            if let Some(value) = value {
                args.set(name, value.clone());
            }
        }
        if let Some(reject) = self.reject_unauthorized {
            args.set("rejectUnauthorized", reject);
        }
        args
    }
}

#[derive(Args, Debug, Clone)]
pub struct SessionArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Fail instead of prompting for missing values
    #[arg(long)]
    pub no_prompt: bool,

    /// Prepare the session for logging in to obtain a token
    #[arg(long)]
    pub request_token: bool,

    /// Method promoted to the top of the default authentication order
    #[arg(long, value_enum)]
    pub default_top_auth: Option<TopAuthArg>,

    /// Comma-separated methods the service accepts (default: all)
    #[arg(long, value_delimiter = ',', value_parser = parse_auth_type)]
    pub supported_auth: Vec<AuthType>,

    /// Name of the service used in prompt questions
    #[arg(long, default_value = "your service")]
    pub service: String,

    /// Seconds to wait for each prompted value
    #[arg(long)]
    pub prompt_timeout: Option<u64>,

    /// Report format
    #[arg(long, value_enum, default_value = "json")]
    pub format: OutputFormat,
}

#[derive(Args, Debug, Clone)]
pub struct ProxyArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Proxy for http sessions, overriding HTTP_PROXY
    #[arg(long)]
    pub http_proxy: Option<String>,

    /// Proxy for https sessions, overriding HTTPS_PROXY
    #[arg(long)]
    pub https_proxy: Option<String>,

    /// Comma-separated hosts reached directly, replacing NO_PROXY
    #[arg(long, value_delimiter = ',')]
    pub no_proxy: Option<Vec<String>>,

    /// Value of the Proxy-Authorization header
    #[arg(long)]
    pub proxy_authorization: Option<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopAuthArg {
    Basic,
    Token,
}

impl From<TopAuthArg> for TopDefaultAuth {
    fn from(arg: TopAuthArg) -> Self {
        match arg {
            TopAuthArg::Basic => TopDefaultAuth::Basic,
            TopAuthArg::Token => TopDefaultAuth::Token,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

fn parse_auth_type(value: &str) -> Result<AuthType, String> {
    value.trim().parse::<AuthType>().map_err(|e| e.to_string())
}
