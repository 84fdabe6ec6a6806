use crate::*;

pub fn handle_admin_commands(cli: &Cli, ctx: &AppContext) -> anyhow::Result<bool> {
    let Commands::Reset { credentials } = &cli.command else {
        return Ok(false);
    };

    let identity = ctx.require_identity(credentials)?;
    if authorize_reset(Some(&identity), &ctx.admin_username) == ResetDecision::Denied {
        warn!(user = %identity.username, "reset denied");
        audit(
            "reset_denied",
            serde_json::json!({ "user": identity.username }),
        );
        return Err(LedgerError::Unauthorized(
            "only the Emperor's chosen administrator may erase the archives".to_string(),
        )
        .into());
    }

    ctx.ledger.reset()?;
    audit(
        "reset",
        serde_json::json!({
            "user": identity.username,
            "ledger": ctx.ledger.path().to_string_lossy(),
        }),
    );
    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok: true,
                data: "reset"
            })?
        );
    } else {
        println!("archives erased by {}", identity.display_name);
    }
    Ok(true)
}
