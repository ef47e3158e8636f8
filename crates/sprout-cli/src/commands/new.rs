use miette::Result;

use sprout_core::config::GlobalConfig;
use sprout_core::context::InvocationContext;
use sprout_core::template::Template;
use sprout_ops::ops_install::Installer;
use sprout_ops::ops_new::{self, ScaffoldOptions};
use sprout_util::errors::SproutError;

use crate::cli::Cli;

pub fn exec(cli: &Cli) -> Result<()> {
    let base_dir = std::env::current_dir().map_err(SproutError::Io)?;
    let ctx = InvocationContext::resolve(cli.name.as_deref(), &base_dir)?;

    let config = GlobalConfig::load()?;
    let template = Template::locate(cli.template_dir.as_deref(), &config.template);
    let installer = (!cli.skip_install).then(|| Installer::from_config(&config.install));
    let on_install_failure = cli.on_install_failure.unwrap_or(config.install.on_failure);

    let opts = ScaffoldOptions {
        template,
        installer,
        on_install_failure,
    };
    let result = ops_new::scaffold(&ctx, &opts)?;

    println!("Success! Your new project is ready.");
    println!(
        "Created {} at {}",
        result.project_name,
        result.project_dir.display()
    );

    Ok(())
}
