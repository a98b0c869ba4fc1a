//! Campaign session management.
//!
//! `CampaignSession` wraps a [`CampaignState`] with its persistence manager
//! and random source. Every mutating call flushes the campaign to the durable
//! store before it returns; a failed write is logged and play continues on
//! the in-memory state.

use gb_core::{CampaignState, Category, CoreError, EventLog, ListItem, LogEntry, LogKind, TrackKind};
use gb_oracle::{ChaosFactor, Die, Odds, RandomSource, Resolution, SeededRandom, resolve};
use gb_store::{KeyValueStore, PersistenceManager, export_campaign, import_campaign};

use crate::config::SessionConfig;
use crate::error::{SoloError, SoloResult};

/// Entries shown by a bare `journal` command.
const JOURNAL_TAIL: usize = 10;

/// An open campaign.
pub struct CampaignSession<D, S> {
    state: CampaignState,
    persistence: PersistenceManager<D, S>,
    rng: Box<dyn RandomSource>,
    draft: String,
}

impl<D: KeyValueStore, S: KeyValueStore> CampaignSession<D, S> {
    /// Open the saved campaign (or the defaults) with a seeded or OS-drawn RNG.
    pub fn open(persistence: PersistenceManager<D, S>, config: SessionConfig) -> Self {
        let rng: Box<dyn RandomSource> = match config.seed {
            Some(seed) => Box::new(SeededRandom::from_seed(seed)),
            None => Box::new(SeededRandom::from_entropy()),
        };
        Self::with_random(persistence, config, rng)
    }

    /// Open the saved campaign with an explicit random source.
    pub fn with_random(
        persistence: PersistenceManager<D, S>,
        config: SessionConfig,
        rng: Box<dyn RandomSource>,
    ) -> Self {
        let state = persistence.load_or_default();
        let draft = persistence.load_draft();
        let mut session = Self {
            state,
            persistence,
            rng,
            draft,
        };
        if let Some(chaos) = config.initial_chaos {
            session.set_chaos(chaos);
        }
        session
    }

    /// The campaign.
    pub fn state(&self) -> &CampaignState {
        &self.state
    }

    /// The current chaos factor.
    pub fn chaos(&self) -> ChaosFactor {
        self.state.chaos_factor
    }

    /// The event log.
    pub fn log(&self) -> &EventLog {
        &self.state.logs
    }

    /// The unsubmitted log draft.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// The persistence manager.
    pub fn persistence(&self) -> &PersistenceManager<D, S> {
        &self.persistence
    }

    /// Ask the oracle a question and record the answer.
    ///
    /// A blank question is rejected with nothing rolled, logged or saved.
    pub fn resolve_question(&mut self, question: &str, odds: Odds) -> SoloResult<Resolution> {
        let resolution = resolve(question, self.state.chaos_factor, odds, self.rng.as_mut())?;
        for entry in resolution_entries(&resolution) {
            self.state.append_log(entry);
        }
        self.flush();
        Ok(resolution)
    }

    /// Append an entry to the log.
    pub fn append_log(&mut self, entry: LogEntry) {
        self.state.append_log(entry);
        self.flush();
    }

    /// Append a player-written entry of `kind`. Blank text is rejected.
    pub fn record(&mut self, kind: LogKind, text: &str) -> SoloResult<LogEntry> {
        let text = text.trim();
        if text.is_empty() {
            return Err(CoreError::Blank("log entry").into());
        }
        let entry = LogEntry::new(kind, text, None);
        self.append_log(entry.clone());
        Ok(entry)
    }

    /// Submit the draft as a log entry of `kind` and clear it.
    pub fn submit_narrative(&mut self, kind: LogKind) -> SoloResult<LogEntry> {
        let entry = self.record(kind, &self.draft.clone())?;
        self.draft.clear();
        self.persist_draft();
        Ok(entry)
    }

    /// Replace the draft and keep it in the session store.
    pub fn set_draft(&mut self, text: &str) {
        self.draft = text.to_string();
        self.persist_draft();
    }

    /// Roll a die from the tray and log the result.
    pub fn roll_die(&mut self, die: Die) -> u32 {
        let result = die.roll(self.rng.as_mut());
        self.append_log(LogEntry::system(format!("Rolled {die}: {result}")));
        result
    }

    /// Set the chaos factor, clamped to 1-9.
    pub fn set_chaos(&mut self, value: u32) -> ChaosFactor {
        self.state.chaos_factor.set(value);
        self.flush();
        self.state.chaos_factor
    }

    /// Raise the chaos factor by one, up to 9.
    pub fn increase_chaos(&mut self) -> ChaosFactor {
        self.state.chaos_factor.increase();
        self.flush();
        self.state.chaos_factor
    }

    /// Lower the chaos factor by one, down to 1.
    pub fn decrease_chaos(&mut self) -> ChaosFactor {
        self.state.chaos_factor.decrease();
        self.flush();
        self.state.chaos_factor
    }

    /// Adjust an agent's track by `delta`, clamped. Returns the new value.
    pub fn adjust_track(&mut self, agent: &str, kind: TrackKind, delta: i32) -> SoloResult<i32> {
        let value = self.state.agent_mut(agent)?.adjust_track(kind, delta);
        self.flush();
        Ok(value)
    }

    /// Append a skill line to an agent.
    pub fn add_skill(&mut self, agent: &str, skill: &str) -> SoloResult<()> {
        self.state.agent_mut(agent)?.add_skill(skill)?;
        self.flush();
        Ok(())
    }

    /// Replace an agent's portrait with the given image bytes.
    pub fn upload_portrait(&mut self, agent: &str, bytes: Vec<u8>) -> SoloResult<()> {
        self.state.agent_mut(agent)?.set_portrait(bytes);
        self.flush();
        Ok(())
    }

    /// Add a thread, NPC or location.
    pub fn add_item(
        &mut self,
        category: Category,
        title: &str,
        description: &str,
    ) -> SoloResult<ListItem> {
        let item = self.state.add_item(category, title, description)?.clone();
        self.flush();
        Ok(item)
    }

    /// Edit a thread, NPC or location found by id or title.
    pub fn edit_item(
        &mut self,
        category: Category,
        key: &str,
        title: &str,
        description: &str,
    ) -> SoloResult<ListItem> {
        let item = self
            .state
            .edit_item(category, key, title, description)?
            .clone();
        self.flush();
        Ok(item)
    }

    /// Remove a thread, NPC or location found by id or title.
    pub fn remove_item(&mut self, category: Category, key: &str) -> SoloResult<ListItem> {
        let item = self.state.remove_item(category, key)?;
        self.flush();
        Ok(item)
    }

    /// Replace the current scene.
    pub fn set_scene(&mut self, title: &str, description: &str) -> SoloResult<()> {
        self.state.set_scene(title, description)?;
        self.flush();
        Ok(())
    }

    /// Write the campaign now, reporting any storage failure.
    pub fn save(&mut self) -> SoloResult<()> {
        self.persistence.save(&self.state)?;
        Ok(())
    }

    /// Render the campaign as a portable save file.
    pub fn export(&self) -> SoloResult<Vec<u8>> {
        Ok(export_campaign(&self.state)?)
    }

    /// Replace the campaign with an imported save.
    ///
    /// A rejected file leaves the campaign exactly as it was.
    pub fn import(&mut self, bytes: &[u8]) -> SoloResult<()> {
        let state = import_campaign(bytes)?;
        log::info!(
            "imported campaign: {} agents, {} log entries",
            state.agents.len(),
            state.logs.len()
        );
        self.state = state;
        self.flush();
        Ok(())
    }

    /// Discard the campaign and the draft, clearing both stores.
    ///
    /// The defaults are not written back until the next mutation.
    pub fn reset(&mut self) {
        self.state = self.persistence.reset();
        self.draft.clear();
        log::info!("campaign reset to defaults");
    }

    fn flush(&mut self) {
        if let Err(e) = self.persistence.save(&self.state) {
            log::warn!("could not save campaign: {e}");
        }
    }

    fn persist_draft(&mut self) {
        if let Err(e) = self.persistence.save_draft(&self.draft) {
            log::warn!("could not save draft: {e}");
        }
    }

    /// Process a line of user input and return a response.
    pub fn process(&mut self, input: &str) -> SoloResult<String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }

        let (cmd, rest) = split_word(trimmed);
        let cmd = cmd.to_lowercase();

        match cmd.as_str() {
            "ask" => self.do_ask(rest),
            "roll" => self.do_roll(rest),
            "log" | "note" => self.do_record(LogKind::Narrative, rest),
            "say" => self.do_record(LogKind::Dialogue, rest),
            "combat" => self.do_record(LogKind::Combat, rest),
            "draft" => Ok(self.do_draft(rest)),
            "submit" => self.do_submit(rest),
            "chaos" => self.do_chaos(rest),
            "hp" | "wp" | "san" => self.do_track(&cmd, rest),
            "skill" => self.do_skill(rest),
            "thread" | "npc" | "location" => self.do_list(&cmd, rest),
            "threads" | "npcs" | "locations" => Ok(self.render_list(cmd.parse()?)),
            "scene" => self.do_scene(rest),
            "agents" => Ok(self.do_agents()),
            "status" => Ok(self.do_status()),
            "journal" => self.do_journal(rest),
            "help" => Ok(help(rest)),
            "quit" | "q" => Ok("Goodbye!".to_string()),
            _ => Err(SoloError::UnknownCommand(cmd)),
        }
    }

    fn do_ask(&mut self, rest: &str) -> SoloResult<String> {
        let (odds, question) = parse_ask(rest)?;
        let r = self.resolve_question(question, odds)?;

        let mut output = format!(
            "Oracle ({}, chaos {}): {} (roll {} vs {}%)",
            r.odds, r.chaos, r.verdict, r.roll, r.probability
        );
        if let Some(event) = &r.random_event {
            output.push_str(&format!("\n  Random Event! {event}"));
        }
        Ok(output)
    }

    fn do_roll(&mut self, rest: &str) -> SoloResult<String> {
        let die = if rest.is_empty() {
            Die::D100
        } else {
            rest.parse()?
        };
        let result = self.roll_die(die);
        Ok(format!("Rolled {die}: {result}"))
    }

    fn do_record(&mut self, kind: LogKind, text: &str) -> SoloResult<String> {
        if text.is_empty() {
            return Err(SoloError::InvalidChoice(format!(
                "usage: {} <text>",
                command_for(kind)
            )));
        }
        self.record(kind, text)?;
        Ok(format!("Logged {kind} entry."))
    }

    fn do_draft(&mut self, rest: &str) -> String {
        match rest {
            "" if self.draft.is_empty() => "No draft.".to_string(),
            "" => format!("Draft: {}", self.draft),
            "clear" => {
                self.set_draft("");
                "Draft cleared.".to_string()
            }
            text => {
                self.set_draft(text);
                "Draft saved.".to_string()
            }
        }
    }

    fn do_submit(&mut self, rest: &str) -> SoloResult<String> {
        let kind = match rest.to_lowercase().as_str() {
            "" | "narrative" => LogKind::Narrative,
            "dialogue" | "say" => LogKind::Dialogue,
            "combat" => LogKind::Combat,
            other => {
                return Err(SoloError::InvalidChoice(format!(
                    "unknown entry kind '{other}', use: narrative, dialogue, combat"
                )));
            }
        };
        if self.draft.trim().is_empty() {
            return Err(SoloError::InvalidChoice(
                "nothing to submit, write a draft first".to_string(),
            ));
        }
        self.submit_narrative(kind)?;
        Ok(format!("Logged {kind} entry."))
    }

    fn do_chaos(&mut self, rest: &str) -> SoloResult<String> {
        let chaos = match rest.to_lowercase().as_str() {
            "" => return Ok(format!("Chaos Factor: {}/9", self.chaos())),
            "+" | "up" | "increase" => self.increase_chaos(),
            "-" | "down" | "decrease" => self.decrease_chaos(),
            value => {
                let value: u32 = value.parse().map_err(|_| {
                    SoloError::InvalidChoice("usage: chaos [+|-|1-9]".to_string())
                })?;
                self.set_chaos(value)
            }
        };
        Ok(format!("Chaos Factor: {chaos}/9"))
    }

    fn do_track(&mut self, cmd: &str, rest: &str) -> SoloResult<String> {
        let usage = || SoloError::InvalidChoice(format!("usage: {cmd} <agent> <+/-amount>"));
        let kind: TrackKind = cmd.parse()?;
        let (agent, delta) = rest.rsplit_once(' ').ok_or_else(usage)?;
        let delta: i32 = delta.trim().parse().map_err(|_| usage())?;

        self.adjust_track(agent, kind, delta)?;
        let agent = self.state.agent(agent)?;
        Ok(format!("{} {kind}: {}", agent.name, agent.track(kind)))
    }

    fn do_skill(&mut self, rest: &str) -> SoloResult<String> {
        let (agent, skill) = split_word(rest);
        if skill.is_empty() {
            return Err(SoloError::InvalidChoice(
                "usage: skill <agent> <skill>".to_string(),
            ));
        }
        self.add_skill(agent, skill)?;
        let agent = self.state.agent(agent)?;
        Ok(format!("Skill added to {}: {skill}", agent.name))
    }

    fn do_list(&mut self, cmd: &str, rest: &str) -> SoloResult<String> {
        let category: Category = cmd.parse()?;
        let (sub, arg) = split_word(rest);

        match sub.to_lowercase().as_str() {
            "" | "list" => Ok(self.render_list(category)),
            "add" if !arg.is_empty() => {
                let (title, description) = split_pipe(arg);
                let item = self.add_item(category, title, description)?;
                Ok(format!("{} added: {}", category.label(), item.title))
            }
            "edit" => {
                let mut parts = arg.splitn(3, '|').map(str::trim);
                let key = parts.next().unwrap_or("");
                let title = parts.next().unwrap_or("");
                let description = parts.next().unwrap_or("");
                if key.is_empty() || title.is_empty() {
                    return Err(SoloError::InvalidChoice(format!(
                        "usage: {cmd} edit <name> | <new title> [| description]"
                    )));
                }
                let item = self.edit_item(category, key, title, description)?;
                Ok(format!("{} updated: {}", category.label(), item.title))
            }
            "remove" if !arg.is_empty() => {
                let item = self.remove_item(category, arg)?;
                Ok(format!("{} removed: {}", category.label(), item.title))
            }
            _ => Err(SoloError::InvalidChoice(format!(
                "usage: {cmd} add|edit|remove|list <name>"
            ))),
        }
    }

    fn render_list(&self, category: Category) -> String {
        let items = self.state.list(category);
        if items.is_empty() {
            return format!("{}: none", category.plural());
        }
        let mut out = format!("{} ({}):\n", category.plural(), items.len());
        for (i, item) in items.iter().enumerate() {
            out.push_str(&format!("  {}. {item}\n", i + 1));
        }
        out.trim_end().to_string()
    }

    fn do_scene(&mut self, rest: &str) -> SoloResult<String> {
        if rest.is_empty() {
            return Ok(format!("Scene: {}", self.state.scene));
        }
        let (title, description) = split_pipe(rest);
        self.set_scene(title, description)?;
        Ok(format!("Scene: {}", self.state.scene))
    }

    fn do_agents(&self) -> String {
        if self.state.agents.is_empty() {
            return "No agents.".to_string();
        }
        let mut out = String::new();
        for agent in &self.state.agents {
            out.push_str(&format!(
                "{} ({})  HP {}  WP {}  SAN {}\n",
                agent.name,
                agent.profession,
                agent.derived.hp,
                agent.derived.wp,
                agent.derived.san
            ));
        }
        out.trim_end().to_string()
    }

    fn do_status(&self) -> String {
        let s = &self.state;
        let mut out = format!("Chaos Factor: {}/9\n", s.chaos_factor);
        out.push_str(&format!("Scene: {}\n", s.scene));
        out.push_str(&format!("Agents: {}\n", s.agents.len()));
        out.push_str(&format!(
            "Threads: {} | NPCs: {} | Locations: {}\n",
            s.threads.len(),
            s.npcs.len(),
            s.locations.len()
        ));
        if !self.draft.is_empty() {
            out.push_str("Draft: pending\n");
        }
        out.push_str(&format!("Log: {} entries", s.logs.len()));
        out
    }

    fn do_journal(&self, rest: &str) -> SoloResult<String> {
        let log = &self.state.logs;
        let count = match rest.to_lowercase().as_str() {
            "markdown" | "md" => return Ok(log.export_markdown()),
            "text" | "txt" => return Ok(log.export_text()),
            "" => JOURNAL_TAIL,
            n => n.parse().map_err(|_| {
                SoloError::InvalidChoice(format!(
                    "unknown journal option '{n}', use: <count>, markdown, text"
                ))
            })?,
        };
        if log.is_empty() {
            return Ok("Log is empty.".to_string());
        }

        let recent = log.tail(count);
        let mut out = format!(
            "Log ({} entries, showing last {}):\n\n",
            log.len(),
            recent.len()
        );
        out.push_str(&EventLog::from(recent.to_vec()).export_text());
        Ok(out.trim_end().to_string())
    }
}

/// Log entries recording an oracle answer and any random event it raised.
fn resolution_entries(r: &Resolution) -> Vec<LogEntry> {
    let mut entries = vec![LogEntry::mythic(
        format!("Q: {}", r.question),
        format!(
            "Odds: {} | Roll: {} vs {}% | Result: {}",
            r.odds,
            r.roll,
            r.probability,
            r.verdict.to_string().to_uppercase()
        ),
    )];
    if let Some(event) = &r.random_event {
        entries.push(LogEntry::alert(
            "RANDOM EVENT TRIGGERED!",
            format!(
                "Doubles rolled ({}) under Chaos Factor ({}).",
                r.roll, r.chaos
            ),
        ));
        entries.push(LogEntry::mythic(
            format!("EVENT FOCUS: {} ({})", event.focus, event.focus_roll),
            format!("Meaning: {}", event.meaning),
        ));
    }
    entries
}

fn command_for(kind: LogKind) -> &'static str {
    match kind {
        LogKind::Dialogue => "say",
        LogKind::Combat => "combat",
        _ => "log",
    }
}

/// Split off the first word.
fn split_word(input: &str) -> (&str, &str) {
    match input.split_once(char::is_whitespace) {
        Some((head, tail)) => (head, tail.trim()),
        None => (input, ""),
    }
}

/// Split `title | description`.
fn split_pipe(input: &str) -> (&str, &str) {
    match input.split_once('|') {
        Some((title, description)) => (title.trim(), description.trim()),
        None => (input.trim(), ""),
    }
}

/// Parse oracle input: `[odds] question?`
///
/// Odds labels run up to three words (`has to be`); the longest match wins.
/// Without a label the question is asked at 50/50.
fn parse_ask(input: &str) -> SoloResult<(Odds, &str)> {
    if input.is_empty() {
        return Err(SoloError::InvalidChoice(
            "usage: ask [odds] <question>".to_string(),
        ));
    }

    let words: Vec<&str> = input.split_whitespace().collect();
    for n in (1..=3).rev() {
        if words.len() <= n {
            continue;
        }
        if let Some(odds) = Odds::parse(&words[..n].join(" ")) {
            let mut question = input;
            for _ in 0..n {
                question = split_word(question).1;
            }
            return Ok((odds, question));
        }
    }

    Ok((Odds::FiftyFifty, input))
}

fn help(topic: &str) -> String {
    match topic.to_lowercase().as_str() {
        "oracle" | "ask" => "\
Oracle Commands:
  ask [odds] <question>         Ask a yes/no question
  roll [d4|d6|d8|d10|d20|d100]  Roll a die (default d100)
  chaos [+|-|1-9]               Show or change the chaos factor

Odds: impossible, no way, unlikely, 50/50, likely, sure thing, has to be"
            .to_string(),
        "log" | "journal" => "\
Log Commands:
  log <text>                    Add a narrative entry
  say <text>                    Add a dialogue entry
  combat <text>                 Add a combat entry
  draft [text|clear]            Show, write or clear the draft
  submit [narrative|dialogue|combat]  Log the draft
  journal [count|markdown|text] Show recent entries or export"
            .to_string(),
        "agents" | "agent" => "\
Agent Commands:
  agents                        List agents and tracks
  hp|wp|san <agent> <+/-n>      Adjust a track
  skill <agent> <skill>         Add a skill"
            .to_string(),
        "lists" | "thread" | "npc" | "location" | "scene" => "\
Tracking Commands:
  thread add <title> [| description]
  thread edit <name> | <title> [| description]
  thread remove <name>
  threads                       List threads
  (npc and location work the same way)
  scene [<title> [| description]]  Show or set the scene"
            .to_string(),
        _ => "\
Greenbox Commands:
  ask [odds] <question>         Consult the oracle
  roll [die]                    Roll a die
  chaos [+|-|1-9]               Chaos factor
  log|say|combat <text>         Write to the log
  draft, submit                 Work on a longer entry
  hp|wp|san <agent> <+/-n>      Adjust a track
  skill <agent> <skill>         Add a skill
  thread|npc|location ...       Manage tracking lists
  scene [title]                 Show or set the scene
  agents                        List agents
  status                        Campaign summary
  journal                       Show the log
  help [topic]                  Show help (oracle, log, agents, lists)
  quit                          Exit"
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gb_oracle::{Focus, ScriptedRandom, Verdict};
    use gb_store::{CAMPAIGN_KEY, DRAFT_KEY, FileStore, MemoryStore};
    use tempfile::TempDir;

    type Session = CampaignSession<MemoryStore, MemoryStore>;

    fn memory() -> PersistenceManager<MemoryStore, MemoryStore> {
        PersistenceManager::new(MemoryStore::new(), MemoryStore::new())
    }

    fn scripted(rolls: &[u32]) -> Session {
        CampaignSession::with_random(
            memory(),
            SessionConfig::default(),
            Box::new(ScriptedRandom::new(rolls.to_vec())),
        )
    }

    fn test_session() -> Session {
        scripted(&[50])
    }

    fn saved(s: &Session) -> CampaignState {
        s.persistence().load().unwrap().unwrap()
    }

    #[test]
    fn opens_with_defaults() {
        let s = test_session();
        assert_eq!(s.state(), &CampaignState::default());
        assert_eq!(s.chaos().value(), 5);
        assert_eq!(s.draft(), "");
        assert!(s.persistence().durable().is_empty());
    }

    #[test]
    fn initial_chaos_overrides_and_saves() {
        let s = CampaignSession::with_random(
            memory(),
            SessionConfig::default().with_chaos(8),
            Box::new(ScriptedRandom::new(vec![50])),
        );
        assert_eq!(s.chaos().value(), 8);
        assert_eq!(saved(&s).chaos_factor.value(), 8);
    }

    #[test]
    fn resolve_question_logs_and_saves() {
        let mut s = scripted(&[40]);
        let before = s.log().len();
        let r = s.resolve_question("  Is the door locked? ", Odds::Likely).unwrap();
        assert_eq!(r.probability, 65);
        assert_eq!(r.verdict, Verdict::Yes);
        assert!(r.random_event.is_none());

        assert_eq!(s.log().len(), before + 1);
        let entry = s.log().latest().unwrap();
        assert_eq!(entry.kind, LogKind::Mythic);
        assert_eq!(entry.content, "Q:   Is the door locked? ");
        assert_eq!(
            entry.details.as_deref(),
            Some("Odds: Likely | Roll: 40 vs 65% | Result: YES")
        );
        assert_eq!(saved(&s), *s.state());
    }

    #[test]
    fn random_event_adds_alert_and_focus() {
        let mut s = scripted(&[33, 50, 1, 1]);
        let before = s.log().len();
        let r = s.resolve_question("Is anyone home?", Odds::FiftyFifty).unwrap();
        let event = r.random_event.unwrap();
        assert_eq!(event.focus, Focus::MoveAwayFromThread);

        let entries = &s.log().entries()[before..];
        assert_eq!(entries.len(), 3);
        assert_eq!(
            entries[0].details.as_deref(),
            Some("Odds: 50/50 | Roll: 33 vs 50% | Result: YES")
        );
        assert_eq!(entries[1].kind, LogKind::Alert);
        assert_eq!(entries[1].content, "RANDOM EVENT TRIGGERED!");
        assert_eq!(
            entries[1].details.as_deref(),
            Some("Doubles rolled (33) under Chaos Factor (5).")
        );
        assert_eq!(entries[2].kind, LogKind::Mythic);
        assert_eq!(entries[2].content, "EVENT FOCUS: Move Away from a Thread (50)");
        assert_eq!(
            entries[2].details.as_deref(),
            Some(format!("Meaning: {}", event.meaning).as_str())
        );
    }

    #[test]
    fn blank_question_has_no_effect() {
        let mut s = test_session();
        let before = s.state().clone();
        let err = s.resolve_question("   ", Odds::Likely).unwrap_err();
        assert!(matches!(
            err,
            SoloError::Oracle(gb_oracle::OracleError::BlankQuestion)
        ));
        assert_eq!(s.state(), &before);
        assert!(s.persistence().durable().is_empty());
    }

    #[test]
    fn roll_die_logs_system_entry() {
        let mut s = scripted(&[7]);
        assert_eq!(s.roll_die(Die::D20), 7);
        let entry = s.log().latest().unwrap();
        assert_eq!(entry.kind, LogKind::System);
        assert_eq!(entry.content, "Rolled d20: 7");
    }

    #[test]
    fn draft_submit_cycle() {
        let mut s = test_session();
        s.set_draft("Jack kicks the door in.");
        assert_eq!(
            s.persistence().session().get(DRAFT_KEY).unwrap().as_deref(),
            Some("Jack kicks the door in.")
        );

        let entry = s.submit_narrative(LogKind::Combat).unwrap();
        assert_eq!(entry.kind, LogKind::Combat);
        assert_eq!(entry.content, "Jack kicks the door in.");
        assert_eq!(s.draft(), "");
        assert!(!s.persistence().session().contains(DRAFT_KEY));
        assert_eq!(saved(&s).logs.latest(), Some(&entry));
    }

    #[test]
    fn blank_draft_is_not_submitted() {
        let mut s = test_session();
        let before = s.log().len();
        assert!(s.submit_narrative(LogKind::Narrative).is_err());
        assert_eq!(s.log().len(), before);
    }

    #[test]
    fn chaos_changes_are_clamped_and_saved() {
        let mut s = test_session();
        assert_eq!(s.set_chaos(12).value(), 9);
        assert_eq!(s.increase_chaos().value(), 9);
        assert_eq!(s.decrease_chaos().value(), 8);
        assert_eq!(saved(&s).chaos_factor.value(), 8);
        assert_eq!(s.set_chaos(0).value(), 1);
        assert_eq!(s.decrease_chaos().value(), 1);
    }

    #[test]
    fn agent_mutations() {
        let mut s = test_session();
        assert_eq!(s.adjust_track("jack", TrackKind::Hp, -20).unwrap(), 0);
        s.add_skill("tom", "Drive 30%").unwrap();
        s.upload_portrait("paul", b"\x89PNG\r\n\x1a\n....".to_vec())
            .unwrap();

        let state = saved(&s);
        assert_eq!(state.agent("jack").unwrap().derived.hp.current, 0);
        assert!(state.agent("tom").unwrap().skills.contains(&"Drive 30%".to_string()));
        let portrait = state.agent("paul").unwrap().portrait.as_ref().unwrap();
        assert_eq!(portrait.media_type(), Some("image/png"));

        assert!(matches!(
            s.adjust_track("nobody", TrackKind::Wp, 1),
            Err(SoloError::Core(CoreError::AgentNotFound(_)))
        ));
    }

    #[test]
    fn list_items_and_scene() {
        let mut s = test_session();
        let item = s.add_item(Category::Thread, "Black van", "Parked outside").unwrap();
        s.edit_item(Category::Thread, &item.id, "White van", "").unwrap();
        assert_eq!(saved(&s).threads.last().unwrap().title, "White van");
        s.remove_item(Category::Thread, "white van").unwrap();
        assert_eq!(saved(&s).threads, gb_core::defaults::threads());

        s.set_scene("Scene 2: The Apartment", "Night").unwrap();
        assert_eq!(saved(&s).scene.title, "Scene 2: The Apartment");
    }

    #[test]
    fn export_import_roundtrip() {
        let mut s = test_session();
        s.set_chaos(3);
        s.record(LogKind::Dialogue, "Who sent you?").unwrap();
        let bytes = s.export().unwrap();

        let mut other = test_session();
        other.import(&bytes).unwrap();
        assert_eq!(other.state(), s.state());
        assert_eq!(saved(&other), *s.state());
    }

    #[test]
    fn rejected_import_leaves_state_untouched() {
        let mut s = test_session();
        s.set_chaos(7);
        let before = s.state().clone();
        let saved_before = s.persistence().durable().get(CAMPAIGN_KEY).unwrap();

        assert!(matches!(
            s.import(br#"{"agents": []}"#),
            Err(SoloError::Import(_))
        ));
        assert!(s.import(b"garbage").is_err());
        assert_eq!(s.state(), &before);
        assert_eq!(s.persistence().durable().get(CAMPAIGN_KEY).unwrap(), saved_before);
    }

    #[test]
    fn reset_restores_defaults_and_clears_stores() {
        let mut s = test_session();
        s.set_chaos(9);
        s.set_draft("unfinished");
        s.reset();
        assert_eq!(s.state(), &CampaignState::default());
        assert_eq!(s.draft(), "");
        assert!(s.persistence().durable().is_empty());
        assert!(s.persistence().session().is_empty());
    }

    #[test]
    fn campaign_survives_restart() {
        let dir = TempDir::new().unwrap();
        let open = || {
            CampaignSession::with_random(
                PersistenceManager::new(FileStore::new(dir.path()), MemoryStore::new()),
                SessionConfig::default(),
                Box::new(ScriptedRandom::new(vec![50])),
            )
        };
        {
            let mut s = open();
            s.add_item(Category::Npc, "Dr. Ruiz", "").unwrap();
        }
        let s = open();
        assert_eq!(s.state().npcs.last().unwrap().title, "Dr. Ruiz");
    }

    #[test]
    fn process_ask() {
        let mut s = test_session();
        let output = s.process("ask likely Is there a guard?").unwrap();
        assert_eq!(output, "Oracle (Likely, chaos 5): Yes (roll 50 vs 65%)");
        assert_eq!(s.log().latest().unwrap().content, "Q: Is there a guard?");
    }

    #[test]
    fn process_ask_default_odds() {
        let mut s = test_session();
        let output = s.process("ask Is it raining?").unwrap();
        assert!(output.contains("50/50"));
    }

    #[test]
    fn process_ask_without_question() {
        let mut s = test_session();
        assert!(s.process("ask").is_err());
    }

    #[test]
    fn process_roll() {
        let mut s = scripted(&[4]);
        assert_eq!(s.process("roll d6").unwrap(), "Rolled d6: 4");
        assert_eq!(s.process("roll").unwrap(), "Rolled d100: 4");
        assert!(s.process("roll d7").is_err());
    }

    #[test]
    fn process_log_commands() {
        let mut s = test_session();
        assert_eq!(s.process("log The hallway smells of ozone.").unwrap(), "Logged narrative entry.");
        assert_eq!(s.process("say Stay behind me.").unwrap(), "Logged dialogue entry.");
        assert_eq!(s.process("combat Tom swings the crowbar.").unwrap(), "Logged combat entry.");
        assert_eq!(s.log().latest().unwrap().kind, LogKind::Combat);
        assert!(s.process("say").is_err());
    }

    #[test]
    fn process_draft_and_submit() {
        let mut s = test_session();
        assert_eq!(s.process("draft").unwrap(), "No draft.");
        s.process("draft We wait until dark.").unwrap();
        assert_eq!(s.process("draft").unwrap(), "Draft: We wait until dark.");
        assert_eq!(s.process("submit").unwrap(), "Logged narrative entry.");
        assert_eq!(s.log().latest().unwrap().content, "We wait until dark.");
        assert!(s.process("submit").is_err());
        assert!(s.process("submit poetry").is_err());
    }

    #[test]
    fn process_chaos() {
        let mut s = test_session();
        assert_eq!(s.process("chaos").unwrap(), "Chaos Factor: 5/9");
        assert_eq!(s.process("chaos +").unwrap(), "Chaos Factor: 6/9");
        assert_eq!(s.process("chaos -").unwrap(), "Chaos Factor: 5/9");
        assert_eq!(s.process("chaos 2").unwrap(), "Chaos Factor: 2/9");
        assert!(s.process("chaos lots").is_err());
    }

    #[test]
    fn process_tracks_and_skills() {
        let mut s = test_session();
        assert_eq!(s.process("hp jack -3").unwrap(), "Jack Robbins HP: 10/13");
        assert_eq!(s.process("san Jack Robbins -5").unwrap(), "Jack Robbins SAN: 50/99");
        assert_eq!(s.process("wp tom +10").unwrap(), "Tom Marteen WP: 14/14");
        assert!(s.process("hp jack").is_err());
        assert_eq!(
            s.process("skill paul Occult 60%").unwrap(),
            "Skill added to Paul Smith: Occult 60%"
        );
    }

    #[test]
    fn process_lists() {
        let mut s = test_session();
        assert_eq!(
            s.process("thread add Black van | Parked outside").unwrap(),
            "Thread added: Black van"
        );
        let list = s.process("threads").unwrap();
        assert!(list.starts_with("Threads (3):"));
        assert!(list.contains("Black van (Parked outside)"));

        assert_eq!(
            s.process("thread edit black van | White van").unwrap(),
            "Thread updated: White van"
        );
        assert_eq!(s.process("thread remove White van").unwrap(), "Thread removed: White van");
        assert!(s.process("thread remove White van").is_err());

        assert_eq!(s.process("npc add Dr. Ruiz").unwrap(), "NPC added: Dr. Ruiz");
        assert!(s.process("location list").unwrap().starts_with("Locations (2):"));
        assert!(s.process("thread frobnicate").is_err());
    }

    #[test]
    fn process_scene() {
        let mut s = test_session();
        assert_eq!(s.process("scene").unwrap(), "Scene: Scene 1: The Call (Briefing)");
        assert_eq!(
            s.process("scene Scene 2: The Apartment | Night").unwrap(),
            "Scene: Scene 2: The Apartment (Night)"
        );
    }

    #[test]
    fn process_status_and_agents() {
        let mut s = test_session();
        s.process("draft pending thought").unwrap();
        let status = s.process("status").unwrap();
        assert!(status.contains("Chaos Factor: 5/9"));
        assert!(status.contains("Scene: Scene 1: The Call"));
        assert!(status.contains("Threads: 2 | NPCs: 1 | Locations: 2"));
        assert!(status.contains("Draft: pending"));
        assert!(status.contains("Log: 2 entries"));

        let agents = s.process("agents").unwrap();
        assert!(agents.contains("Jack Robbins (Police Detective)  HP 13/13"));
        assert_eq!(agents.lines().count(), 3);
    }

    #[test]
    fn process_journal() {
        let mut s = test_session();
        s.process("log First.").unwrap();
        let journal = s.process("journal 1").unwrap();
        assert!(journal.starts_with("Log (3 entries, showing last 1):"));
        assert!(journal.contains("First."));

        assert!(s.process("journal markdown").unwrap().starts_with("# Operation Log"));
        assert!(s.process("journal text").unwrap().starts_with("Operation Log"));
        assert!(s.process("journal pdf").is_err());
    }

    #[test]
    fn process_misc() {
        let mut s = test_session();
        assert_eq!(s.process("").unwrap(), "");
        assert_eq!(s.process("quit").unwrap(), "Goodbye!");
        assert!(s.process("help").unwrap().contains("Greenbox Commands"));
        assert!(s.process("help oracle").unwrap().contains("Odds:"));
        assert!(matches!(
            s.process("dance"),
            Err(SoloError::UnknownCommand(c)) if c == "dance"
        ));
    }

    #[test]
    fn parse_ask_odds() {
        assert_eq!(
            parse_ask("likely Is there a guard?").unwrap(),
            (Odds::Likely, "Is there a guard?")
        );
        assert_eq!(
            parse_ask("has to be Is it him?").unwrap(),
            (Odds::HasToBe, "Is it him?")
        );
        assert_eq!(
            parse_ask("no way Did it survive?").unwrap(),
            (Odds::NoWay, "Did it survive?")
        );
        assert_eq!(
            parse_ask("50/50 Heads?").unwrap(),
            (Odds::FiftyFifty, "Heads?")
        );
        assert_eq!(
            parse_ask("Is it raining?").unwrap(),
            (Odds::FiftyFifty, "Is it raining?")
        );
    }
}
