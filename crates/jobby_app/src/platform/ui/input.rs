//! Maps typed command lines onto messages.

use jobby_core::{
    AppViewModel, EmploymentType, JobDetailsView, JobSummary, JobsPanel, Msg, Password, Route,
    SalaryRange, ScreenView,
};

pub const HELP: &str = "\
Commands:
  login                  open the login form
  user <name>            set the username
  pass <password>        set the password
  submit                 log in
  home | jobs            open a header link
  type <id>              toggle an employment type (FULLTIME, PARTTIME, FREELANCE, INTERNSHIP)
  salary <id>            pick a salary range (1000000, 2000000, 3000000, 4000000)
  search-text <text>     edit the search box
  search                 apply the search box
  open <n|id>            open a job by list number or id
  retry [profile|jobs]   retry a failed load
  back                   go back
  logout                 log out
  goto <path>            open a path such as /jobs/<id>
  help                   show this list
  quit                   exit
";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Dispatch(Msg),
    Help,
    Quit,
    /// Shown to the user as is.
    Invalid(String),
    Ignore,
}

pub fn parse(line: &str, view: &AppViewModel) -> Command {
    let line = line.trim();
    if line.is_empty() {
        return Command::Ignore;
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let msg = match word {
        "help" | "?" => return Command::Help,
        "quit" | "exit" => return Command::Quit,
        "login" => Msg::Navigate(Route::Login),
        "user" => Msg::UsernameChanged(rest.to_string()),
        "pass" => Msg::PasswordChanged(Password::new(rest)),
        "submit" => Msg::LoginSubmitted,
        "home" => Msg::Navigate(Route::Home),
        "jobs" => Msg::Navigate(Route::Jobs),
        "type" => return toggle_employment_type(rest, view),
        "salary" => match SalaryRange::from_id(rest) {
            Some(range) => Msg::SalaryRangeSelected(range),
            None => return Command::Invalid(format!("unknown salary range {rest:?}")),
        },
        "search-text" => Msg::SearchInputChanged(rest.to_string()),
        "search" => Msg::SearchSubmitted,
        "open" => return open_job(rest, view),
        "retry" => return retry(rest, view),
        "back" => Msg::BackClicked,
        "logout" => Msg::LogoutClicked,
        "goto" if !rest.is_empty() => Msg::Navigate(Route::parse(rest)),
        "goto" => return Command::Invalid("usage: goto <path>".to_string()),
        _ => return Command::Invalid(format!("unknown command {word:?}; try `help`")),
    };
    Command::Dispatch(msg)
}

fn toggle_employment_type(id: &str, view: &AppViewModel) -> Command {
    let Some(kind) = EmploymentType::from_id(id) else {
        return Command::Invalid(format!("unknown employment type {id:?}"));
    };
    let ScreenView::Jobs(jobs) = &view.screen else {
        return Command::Invalid("filters are only available on the jobs screen".to_string());
    };
    let selected = jobs
        .employment_types
        .iter()
        .any(|option| option.id == kind.id() && option.selected);
    Command::Dispatch(Msg::EmploymentTypeToggled {
        kind,
        checked: !selected,
    })
}

/// `n` is a 1-based position in the current listing; anything else is taken
/// as a job id.
fn open_job(arg: &str, view: &AppViewModel) -> Command {
    if arg.is_empty() {
        return Command::Invalid("usage: open <n|id>".to_string());
    }
    let ScreenView::Jobs(jobs) = &view.screen else {
        return Command::Invalid("open a job from the jobs screen".to_string());
    };
    let listed: &[JobSummary] = match &jobs.jobs {
        JobsPanel::Listing(listed) => listed.as_slice(),
        _ => &[],
    };
    let id = match arg.parse::<usize>() {
        Ok(n) if (1..=listed.len()).contains(&n) => listed[n - 1].id.clone(),
        _ => arg.to_string(),
    };
    Command::Dispatch(Msg::JobClicked(id))
}

fn retry(target: &str, view: &AppViewModel) -> Command {
    match (&view.screen, target) {
        (ScreenView::Jobs(_), "profile") => Command::Dispatch(Msg::RetryProfileClicked),
        (ScreenView::Jobs(_), "" | "jobs") => Command::Dispatch(Msg::RetryJobsClicked),
        (ScreenView::JobDetails(JobDetailsView::Failed), "") => {
            Command::Dispatch(Msg::RetryJobDetailsClicked)
        }
        _ => Command::Invalid("nothing to retry here".to_string()),
    }
}
