use std::fmt::Write;

use jobby_core::{
    AppViewModel, FilterOption, HeaderView, JobDetailsView, JobSummary, JobsPanel, JobsView,
    LoginView, ProfilePanel, ScreenView, FAILURE_DESCRIPTION, FAILURE_HEADING, HOME_BLURB,
    HOME_HEADING, NOT_FOUND_HEADING, NO_JOBS_DESCRIPTION, NO_JOBS_HEADING,
};

const NOT_FOUND_DESCRIPTION: &str = "We are sorry, the page you requested could not be found.";

/// Renders the whole screen as plain text.
pub fn render(view: &AppViewModel) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n== {} ==", view.route);
    if let Some(header) = &view.header {
        render_header(&mut out, header);
    }
    match &view.screen {
        ScreenView::Login(login) => render_login(&mut out, login),
        ScreenView::Home => {
            let _ = writeln!(out, "{HOME_HEADING}\n{HOME_BLURB}\n[Find Jobs] (jobs)");
        }
        ScreenView::Jobs(jobs) => render_jobs(&mut out, jobs),
        ScreenView::JobDetails(details) => render_job_details(&mut out, details),
        ScreenView::NotFound { path } => {
            let _ = writeln!(out, "{NOT_FOUND_HEADING}\n{NOT_FOUND_DESCRIPTION}\n({path})");
        }
    }
    if view.can_go_back {
        out.push_str("(back)\n");
    }
    out
}

fn render_header(out: &mut String, header: &HeaderView) {
    let links: Vec<String> = header
        .links
        .iter()
        .map(|link| format!("[{}]", link.label))
        .collect();
    let _ = writeln!(out, "{} [Logout]", links.join(" "));
}

fn render_login(out: &mut String, login: &LoginView) {
    let _ = writeln!(out, "USERNAME: {}", login.username);
    let _ = writeln!(out, "PASSWORD: {}", "*".repeat(login.password_len));
    if login.submitting {
        out.push_str("Logging in...\n");
    }
    if let Some(error) = &login.error {
        let _ = writeln!(out, "*{error}");
    }
}

fn render_jobs(out: &mut String, jobs: &JobsView) {
    match &jobs.profile {
        ProfilePanel::Blank => {}
        ProfilePanel::Loading => out.push_str("[profile] loading...\n"),
        ProfilePanel::Failed => out.push_str("[profile] could not load. (retry profile)\n"),
        ProfilePanel::Ready(profile) => {
            let _ = writeln!(out, "[profile] {} | {}", profile.name, profile.short_bio);
        }
    }

    out.push_str("Type of Employment\n");
    render_options(out, &jobs.employment_types, "[x]", "[ ]");
    out.push_str("Salary Range\n");
    render_options(out, &jobs.salary_ranges, "(o)", "( )");
    let _ = writeln!(out, "Search: {:?}", jobs.search_text);

    match &jobs.jobs {
        JobsPanel::Blank => {}
        JobsPanel::Loading => out.push_str("loading jobs...\n"),
        JobsPanel::Failed => {
            let _ = writeln!(out, "{FAILURE_HEADING}\n{FAILURE_DESCRIPTION}\n(retry jobs)");
        }
        JobsPanel::NoJobs => {
            let _ = writeln!(out, "{NO_JOBS_HEADING}\n{NO_JOBS_DESCRIPTION}");
        }
        JobsPanel::Listing(listing) => {
            for (index, job) in listing.iter().enumerate() {
                render_job_card(out, index + 1, job);
            }
        }
    }
}

fn render_options(out: &mut String, options: &[FilterOption], on: &str, off: &str) {
    for option in options {
        let mark = if option.selected { on } else { off };
        let _ = writeln!(out, "  {mark} {} ({})", option.label, option.id);
    }
}

fn render_job_card(out: &mut String, position: usize, job: &JobSummary) {
    let _ = writeln!(
        out,
        "{position}. {} ({:.1}) | {} | {} | {}",
        job.title, job.rating, job.location, job.employment_type, job.package_per_annum
    );
    let _ = writeln!(out, "   {}", job.job_description);
}

fn render_job_details(out: &mut String, details: &JobDetailsView) {
    match details {
        JobDetailsView::Blank => {}
        JobDetailsView::Loading => out.push_str("loading job...\n"),
        JobDetailsView::Failed => {
            let _ = writeln!(out, "{FAILURE_HEADING}\n{FAILURE_DESCRIPTION}\n(retry)");
        }
        JobDetailsView::Ready { job, similar_jobs } => {
            let _ = writeln!(
                out,
                "{} ({:.1}) | {} | {} | {}",
                job.title, job.rating, job.location, job.employment_type, job.package_per_annum
            );
            let _ = writeln!(out, "Description (Visit {})", job.company_website_url);
            let _ = writeln!(out, "  {}", job.job_description);
            if !job.skills.is_empty() {
                let names: Vec<&str> = job.skills.iter().map(|skill| skill.name.as_str()).collect();
                let _ = writeln!(out, "Skills: {}", names.join(", "));
            }
            let _ = writeln!(out, "Life at Company\n  {}", job.life_at_company.description);
            if !similar_jobs.is_empty() {
                out.push_str("Similar Jobs\n");
                for similar in similar_jobs {
                    let _ = writeln!(
                        out,
                        "  - {} ({:.1}) | {} | {}",
                        similar.title, similar.rating, similar.location, similar.employment_type
                    );
                }
            }
        }
    }
}
