use crate::*;

pub fn handle_runtime_commands(cli: &Cli, ctx: &AppContext) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Vote {
            entity,
            category,
            credentials,
        } => {
            let identity = ctx.require_identity(credentials)?;
            let vote = ctx.ledger.append_raw(entity, category)?;
            info!(
                user = %identity.username,
                entity = %vote.entity,
                category = %vote.category,
                "vote recorded"
            );
            audit(
                "vote",
                serde_json::json!({
                    "user": identity.username,
                    "entity": vote.entity,
                    "category": vote.category,
                }),
            );
            print_one(cli.json, vote, |v| {
                format!(
                    "vote recorded: {} ({}). May the Force be with you.",
                    v.entity, v.category
                )
            })?;
        }
        Commands::Stats { top } => {
            let votes = ctx.ledger.load()?;
            let stats = Tally::from_votes(&votes, *top);
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: true,
                        data: stats
                    })?
                );
            } else {
                println!("total votes: {}", stats.total);
                for (category, count) in &stats.by_category {
                    println!("{}: {}", category, count);
                }
                if stats.total == 0 {
                    println!("no votes yet");
                } else {
                    println!("top {}", top);
                    for e in &stats.top {
                        println!("{}", ranked_row(e));
                    }
                }
            }
        }
        Commands::Ranking => {
            let votes = ctx.ledger.load()?;
            let ranking = rank_entities(&votes);
            print_out(cli.json, &ranking, ranked_row)?;
        }
        Commands::Top { n } => {
            let votes = ctx.ledger.load()?;
            let best = top_n(&votes, *n);
            print_out(cli.json, &best, ranked_row)?;
        }
        Commands::List => {
            let votes = ctx.ledger.load()?;
            print_out(cli.json, &votes, |v| {
                format!(
                    "{}\t{}\t{}",
                    v.timestamp.format(TIMESTAMP_FORMAT),
                    v.entity,
                    v.category
                )
            })?;
        }
        Commands::Characters { action: None } => {
            let items = catalog();
            print_out(cli.json, &items, |c| {
                format!("{}\t{}\t{}", c.kind, c.slug, c.label)
            })?;
        }
        Commands::Characters {
            action: Some(CharacterCommands::Show { entity }),
        } => {
            let entity: Entity = entity.parse()?;
            print_one(cli.json, CharacterProfile::from(entity), |p| {
                format!("{}\n{}\n\n{}", p.label, p.image, p.bio)
            })?;
        }
        Commands::Characters {
            action: Some(CharacterCommands::Album),
        } => {
            let album: Vec<CharacterProfile> =
                Entity::ALL.into_iter().map(CharacterProfile::from).collect();
            print_out(cli.json, &album, |p| format!("{}\t{}", p.label, p.image))?;
        }
        Commands::Whoami { credentials } => {
            let outcome = ctx.login(credentials);
            if outcome == AuthOutcome::Rejected {
                return Err(LedgerError::AuthRejected.into());
            }
            let identity = outcome.identity().cloned();
            let report = WhoAmIReport {
                status: outcome.status().to_string(),
                can_reset: authorize_reset(identity.as_ref(), &ctx.admin_username)
                    == ResetDecision::Permitted,
                identity,
            };
            print_one(cli.json, report, |r| match &r.identity {
                Some(id) => format!(
                    "welcome {} ({:?}, can_reset={})",
                    id.display_name, id.role, r.can_reset
                ),
                None => "not logged in: pass --user and --password".to_string(),
            })?;
        }
        // handled by `handle_admin_commands`
        Commands::Reset { .. } => {}
    }
    Ok(())
}

fn ranked_row(e: &EntityCount) -> String {
    match podium_medal(e.rank) {
        Some(medal) => format!("{} {}\t{} votes", medal, e.entity, e.votes),
        None => format!("{}. {}\t{} votes", e.rank, e.entity, e.votes),
    }
}

fn catalog() -> Vec<CatalogItem> {
    let characters = Entity::ALL.into_iter().map(|e| CatalogItem {
        kind: "character".to_string(),
        slug: e.slug().to_string(),
        label: e.label().to_string(),
    });
    let sides = Category::ALL.into_iter().map(|c| CatalogItem {
        kind: "side".to_string(),
        slug: c.slug().to_string(),
        label: c.display_name().to_string(),
    });
    characters.chain(sides).collect()
}
