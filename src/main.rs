use proconnect::config::Settings;
use proconnect::core::{FilterSet, MatchEngine, ThreadStore};
use proconnect::models::{MatchingDomain, Notice, PresenceStatus, Profile, Rejection};
use proconnect::services::load_fixtures;
use std::io::{self, BufRead, Write};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_logging(level: &str, format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_level(true);

    if format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }
}

fn domain_noun(domain: MatchingDomain) -> &'static str {
    match domain {
        MatchingDomain::Developer => "developers",
        MatchingDomain::Doctor => "medical professionals",
        MatchingDomain::Founder => "founders",
    }
}

fn status_text(status: PresenceStatus) -> &'static str {
    match status {
        PresenceStatus::Online => "Online now",
        PresenceStatus::RecentlyActive => "Recently active",
        PresenceStatus::Offline => "Offline",
    }
}

fn render_profile(out: &mut impl Write, profile: &Profile, photo: Option<&str>) -> io::Result<()> {
    writeln!(out, "[{}] {}, {}  ({}% match)", profile.id, profile.name, profile.age, profile.match_score)?;
    writeln!(out, "    {} at {}", profile.profession, profile.organization)?;
    writeln!(out, "    {} | {}", profile.location, status_text(profile.online_status))?;
    if !profile.bio.is_empty() {
        writeln!(out, "    {}", profile.bio)?;
    }
    if !profile.interests.is_empty() {
        let shown: Vec<&str> = profile.interests.iter().take(3).map(String::as_str).collect();
        let more = profile.interests.len().saturating_sub(3);
        if more > 0 {
            writeln!(out, "    {} +{} more", shown.join(", "), more)?;
        } else {
            writeln!(out, "    {}", shown.join(", "))?;
        }
    }
    if let Some(photo) = photo {
        writeln!(out, "    photo: {}", photo)?;
    }
    Ok(())
}

fn render_notices(out: &mut impl Write, engine: &MatchEngine, notices: &[Notice]) -> io::Result<()> {
    for notice in notices {
        match notice {
            Notice::Matched(event) => {
                let name = engine
                    .roster()
                    .get(&event.candidate_id)
                    .map_or(event.candidate_id.as_str(), |p| p.name.as_str());
                writeln!(out, "It's a Match! You and {} liked each other!", name)?;
            }
            Notice::Passed { .. } => {}
            Notice::ConversationOpened { candidate_id, created } => {
                let verb = if *created { "Started" } else { "Resumed" };
                writeln!(out, "{} a conversation with {}", verb, candidate_id)?;
            }
            Notice::NoMoreCandidates { domain } => {
                writeln!(out, "No more profiles. Check back later for more {}!", domain_noun(*domain))?;
            }
        }
    }
    Ok(())
}

fn render_rejection(out: &mut impl Write, engine: &MatchEngine, rejection: &Rejection) -> io::Result<()> {
    match rejection.notice(engine.domain()) {
        Some(notice) => render_notices(out, engine, &[notice]),
        None => writeln!(out, "({})", rejection),
    }
}

fn show_current(out: &mut impl Write, engine: &MatchEngine) -> io::Result<()> {
    match engine.current() {
        Some(profile) => render_profile(out, profile, engine.session().current_photo()),
        None => writeln!(
            out,
            "You're all caught up! Check back later for more {}.",
            domain_noun(engine.domain())
        ),
    }
}

fn print_help(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "commands: show | like | pass | message | send <id> <text> | thread <id>")?;
    writeln!(out, "          filter <tag>[,<tag>...] | toggle <tag> | apply | clear | tags")?;
    writeln!(out, "          photo next|prev | stats | export | help | quit")
}

/// Run an action against whoever is presented right now
fn act<F>(out: &mut impl Write, engine: &mut MatchEngine, action: F) -> io::Result<()>
where
    F: FnOnce(&mut MatchEngine, &str) -> Result<Vec<Notice>, Rejection>,
{
    let id = engine.current().map(|p| p.id.clone()).unwrap_or_default();
    match action(&mut *engine, &id) {
        Ok(notices) => render_notices(out, engine, &notices)?,
        Err(rejection) => render_rejection(out, engine, &rejection)?,
    }
    show_current(out, engine)
}

fn run(engine: &mut MatchEngine, pending: &mut FilterSet) -> io::Result<()> {
    let stdin = io::stdin();
    let mut out = io::stdout().lock();

    print_help(&mut out)?;
    show_current(&mut out, engine)?;

    for line in stdin.lock().lines() {
        let line = line?;
        let (command, rest) = match line.trim().split_once(' ') {
            Some((command, rest)) => (command, rest.trim()),
            None => (line.trim(), ""),
        };

        match command {
            "" => continue,
            "show" => show_current(&mut out, engine)?,
            "like" => act(&mut out, engine, |e, id| e.like(id))?,
            "pass" => act(&mut out, engine, |e, id| e.pass(id))?,
            "message" => act(&mut out, engine, |e, id| e.message(id))?,
            "send" => {
                let (id, text) = rest.split_once(' ').unwrap_or((rest, ""));
                match engine.send_message(id, text) {
                    Ok(message) => writeln!(out, "me: {}", message.text)?,
                    Err(rejection) => render_rejection(&mut out, engine, &rejection)?,
                }
            }
            "thread" => match engine.thread(rest) {
                Some(thread) => {
                    for message in thread.messages() {
                        let who = if message.is_mine() { "me" } else { thread.candidate_id.as_str() };
                        writeln!(out, "{} [{}]: {}", who, message.timestamp.format("%H:%M"), message.text)?;
                    }
                }
                None => writeln!(out, "No conversation with {}", rest)?,
            },
            "filter" => {
                *pending = FilterSet::new(rest.split(',').map(str::trim).filter(|t| !t.is_empty()));
                engine.apply_filters(pending.clone());
                show_current(&mut out, engine)?;
            }
            "toggle" => {
                let selected = pending.toggle(rest);
                writeln!(
                    out,
                    "{} {} (apply with 'filter' or 'apply'; {} selected)",
                    if selected { "Selected" } else { "Deselected" },
                    rest,
                    pending.len()
                )?;
            }
            "apply" => {
                engine.apply_filters(pending.clone());
                show_current(&mut out, engine)?;
            }
            "clear" => {
                pending.clear();
                engine.apply_filters(FilterSet::default());
                show_current(&mut out, engine)?;
            }
            "tags" => {
                for tag in engine.taxonomy() {
                    let mark = if pending.contains(tag) { "*" } else { " " };
                    writeln!(out, "{} {}", mark, tag)?;
                }
            }
            "photo" => {
                let photo = match rest {
                    "prev" => engine.prev_photo(),
                    _ => engine.next_photo(),
                };
                writeln!(out, "photo: {}", photo.unwrap_or("none"))?;
            }
            "stats" => {
                let stats = engine.stats();
                writeln!(out, "Likes sent:    {}", stats.likes_sent)?;
                writeln!(out, "Matches:       {}", stats.matches)?;
                writeln!(out, "Passes:        {}", stats.passes)?;
                writeln!(out, "Conversations: {}", stats.conversations)?;
                writeln!(out, "Messages sent: {}", stats.messages_sent)?;
            }
            "export" => {
                let threads: Vec<_> = engine.threads().iter().collect();
                let dump = serde_json::json!({
                    "domain": engine.domain(),
                    "filters": engine.filters(),
                    "state": engine.state(),
                    "matches": engine.matches(),
                    "threads": threads,
                    "stats": engine.stats(),
                });
                match serde_json::to_string_pretty(&dump) {
                    Ok(json) => writeln!(out, "{}", json)?,
                    Err(e) => error!("Failed to serialize session: {}", e),
                }
            }
            "help" => print_help(&mut out)?,
            "quit" | "exit" => break,
            other => writeln!(out, "Unknown command: {}", other)?,
        }
    }

    Ok(())
}

fn main() {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            init_logging("info", "compact");
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&settings.logging.level, &settings.logging.format);

    let domain = match std::env::args().nth(1) {
        Some(arg) => match arg.parse::<MatchingDomain>() {
            Ok(domain) => domain,
            Err(e) => {
                error!("{}", e);
                std::process::exit(2);
            }
        },
        None => settings.session.domain,
    };

    info!("Starting ProConnect {} session", domain);

    let fixtures = match load_fixtures(&settings.fixtures.path) {
        Ok(fixtures) => fixtures,
        Err(e) => {
            error!("Failed to load fixtures from {}: {}", settings.fixtures.path, e);
            std::process::exit(1);
        }
    };

    let roster = match fixtures.roster(domain) {
        Ok(roster) => roster,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let mut engine = MatchEngine::new(roster, ThreadStore::new(fixtures.seeds(domain)));
    let mut pending = FilterSet::default();

    if let Err(e) = run(&mut engine, &mut pending) {
        error!("Console error: {}", e);
        std::process::exit(1);
    }

    info!("Session ended: {:?}", engine.stats());
}
