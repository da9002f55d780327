use log::error;
use std::process::ExitCode;
use userprobe::config::CONFIG;
use userprobe::constants::{CHECK_PASSWORD, CHECK_PASSWORD_HASH};
use userprobe::{check_password, render_check};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&CONFIG.log_level)).init();

    match check_password(CHECK_PASSWORD, CHECK_PASSWORD_HASH) {
        Ok(valid) => {
            println!("{}", render_check(valid));
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("check-password failed: {}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
