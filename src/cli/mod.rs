use clap::Subcommand;

use crate::connector::DEFAULT_SERVER_URL;

#[derive(Subcommand)]
pub enum Commands {
    /// Run the relay proxy (reads GEMINI_API_KEY from the environment or .env)
    Serve {
        #[arg(short, long, default_value = "5050")]
        port: u16,

        /// Bind to 0.0.0.0 instead of 127.0.0.1, exposing the server on all network interfaces
        #[arg(long)]
        public: bool,
    },

    /// Open the full-screen chat client
    Chat {
        /// Base URL of the proxy
        #[arg(short, long, env = "NILAI_SERVER_URL", default_value = DEFAULT_SERVER_URL)]
        server: String,
    },

    /// Send a single message through the proxy and print the reply
    Send {
        message: String,

        /// Base URL of the proxy
        #[arg(short, long, env = "NILAI_SERVER_URL", default_value = DEFAULT_SERVER_URL)]
        server: String,
    },
}
