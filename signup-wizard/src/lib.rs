use anyhow::Context;
use clap::Parser;
use signup_core::cli::{Cli, Command};
use signup_core::{FormData, Summary, WizardConfig};

pub mod submit;

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    signup_core::logging::init_with(cli.log_file.clone());

    let config = match cli.catalog.as_deref() {
        Some(path) => WizardConfig::from_catalog_file(path, cli.variant)?,
        None => WizardConfig::new(cli.variant, signup_core::Catalog::builtin())?,
    };

    if cli.dump_tui {
        signup_tui::wizard::dump_all_steps(config)?;
        return Ok(());
    }

    match &cli.command {
        // No subcommand = launch the TUI wizard (default)
        None => {
            log::info!("🎉 Launching signup wizard ({} variant)...", config.variant);
            let outcome = signup_tui::wizard::run(config)?;
            if outcome.confirmed {
                for line in confirmation_lines(&outcome.form) {
                    println!("{}", line);
                }
            } else {
                println!("👋 Signup cancelled. Nothing was submitted.");
            }
        }
        Some(Command::Submit {
            name,
            email,
            phone,
            plan,
            yearly,
            add_ons,
            json,
        }) => {
            log::info!("📝 Running scripted signup...");
            let request = submit::SubmitRequest {
                name: name.clone(),
                email: email.clone(),
                phone: phone.clone(),
                plan: plan.clone(),
                yearly: *yearly,
                add_ons: add_ons.clone(),
            };
            let report = submit::run_submit(config, &request)?;
            if *json {
                let doc = serde_json::json!({
                    "confirmed": report.confirmed,
                    "form": report.form,
                    "summary": report.summary,
                });
                let text =
                    serde_json::to_string_pretty(&doc).context("failed to encode summary")?;
                println!("{}", text);
            } else {
                for line in &report.transcript {
                    println!("{}", line);
                }
            }
        }
        Some(Command::Catalog) => {
            for line in submit::catalog_lines(&config) {
                println!("{}", line);
            }
        }
    }

    Ok(())
}

/// What the terminal shows once the TUI closes on a confirmed signup.
pub fn confirmation_lines(form: &FormData) -> Vec<String> {
    let name = form.user_info.name.as_deref().unwrap_or_default();
    let mut lines = vec![format!("🎉 Subscription confirmed for {}", name)];
    lines.extend(
        Summary::from_form(form)
            .lines()
            .into_iter()
            .map(|line| format!("   {}", line)),
    );
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use signup_core::{Cadence, Catalog, UserInfo};

    #[test]
    fn confirmation_lists_plan_add_ons_and_total() {
        let catalog = Catalog::builtin();
        let mut form = FormData::new(&catalog).expect("form");
        form.user_info = UserInfo {
            name: Some("Stephen King".to_string()),
            email: Some("stephenking@lorem.com".to_string()),
            phone: Some("+1 234 567 890".to_string()),
        };
        form.cadence = Cadence::Yearly;
        form.add_ons = vec![catalog.add_on("online-services").expect("add-on").clone()];

        let lines = confirmation_lines(&form);
        assert_eq!(lines[0], "🎉 Subscription confirmed for Stephen King");
        assert_eq!(lines[1], "   Arcade (Yearly)  $90/yr");
        assert_eq!(lines[2], "     Online Services  +$10/yr");
        assert_eq!(lines[3], "   Total (per year)  $100/yr");
    }

    #[test]
    fn confirmation_without_a_name_still_renders() {
        let form = FormData::new(&Catalog::builtin()).expect("form");
        let lines = confirmation_lines(&form);
        assert_eq!(lines[0], "🎉 Subscription confirmed for ");
        assert_eq!(lines.last().map(String::as_str), Some("   Total (per month)  $9/mo"));
    }
}
