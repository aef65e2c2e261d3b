use crate::infra::{load_profile, parse_date, InMemorySessionStore};
use chrono::{Local, NaiveDate};
use clap::Args;
use prakriti::config::AppConfig;
use prakriti::error::AppError;
use prakriti::workflows::assessment::{
    aggregate, AnswerImporter, AssessmentReport, AssessmentService, DocumentFormat,
    Dosha, Gender, QuestionBank, ReportDocument, ResponseLevel, ScoreAggregate, Step,
    UserProfile,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Answer CSV with question_id,characteristic_index,response columns
    #[arg(long)]
    pub(crate) answers: PathBuf,
}

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    /// Answer CSV with question_id,characteristic_index,response columns
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Profile JSON (firstName, lastName, email, age, gender, location)
    #[arg(long)]
    pub(crate) profile: PathBuf,
    /// Directory for the exported document (defaults to APP_REPORT_DIR)
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
    /// Export HTML instead of plain text
    #[arg(long)]
    pub(crate) html: bool,
    /// Date printed on the report (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Directory for the exported document (defaults to APP_REPORT_DIR)
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
    /// Export HTML instead of plain text
    #[arg(long)]
    pub(crate) html: bool,
    /// Print the report without writing a document
    #[arg(long)]
    pub(crate) skip_export: bool,
}

pub(crate) fn run_questions() {
    let bank = QuestionBank::standard();

    println!("Prakriti questionnaire ({} questions)", bank.len());
    println!("Response scale:");
    for level in ResponseLevel::ordered() {
        println!(
            "  {:<9} {} (weight {})",
            level.label(),
            level.description(),
            level.weight()
        );
    }

    for (position, question) in bank.questions().iter().enumerate() {
        println!(
            "\nQuestion {} of {} [id {}] {}",
            position + 1,
            bank.len(),
            question.id,
            question.category
        );
        println!("{}", question.prompt);
        for (index, characteristic) in question.characteristics.iter().enumerate() {
            println!(
                "  {}. {} ({})",
                index,
                characteristic.text,
                characteristic.dosha.label()
            );
        }
    }
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let bank = QuestionBank::standard();
    let sheet = AnswerImporter::from_path(&args.answers, &bank)?;

    let remaining = bank.len() - sheet.completed_questions(&bank);
    if remaining > 0 {
        println!(
            "Note: {} question(s) are not fully answered; scoring recorded answers only",
            remaining
        );
    }

    let result = aggregate(sheet.answers());
    render_score(&result);
    Ok(())
}

pub(crate) fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let ReportArgs {
        answers,
        profile,
        output,
        html,
        today,
    } = args;

    let config = AppConfig::load()?;
    let bank = Arc::new(QuestionBank::standard());
    let sheet = AnswerImporter::from_path(&answers, &bank)?;
    let profile = load_profile(&profile)?;
    let today = today.unwrap_or_else(|| Local::now().date_naive());

    let service = AssessmentService::new(Arc::new(InMemorySessionStore::default()), bank);
    let session = service.start(profile)?;
    let id = session.id().clone();
    for (key, answer) in sheet.iter() {
        service.record(&id, key.question_id, key.characteristic_index, answer.level)?;
    }

    let report = service.finalize(&id, today)?;
    render_report(&report);

    let document = service.document(&id, document_format(html), today)?;
    let directory = output.unwrap_or(config.reports.output_dir);
    let path = write_document(&directory, &document)?;
    println!("\nReport saved to {}", path.display());

    service.discard(&id)?;
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        output,
        html,
        skip_export,
    } = args;

    let bank = Arc::new(QuestionBank::standard());
    let service = AssessmentService::new(Arc::new(InMemorySessionStore::default()), bank.clone());
    let today = Local::now().date_naive();

    println!("Prakriti assessment demo");
    let session = service.start(demo_profile())?;
    let id = session.id().clone();
    println!(
        "- Started {} for {}",
        id,
        session
            .profile()
            .map(UserProfile::full_name)
            .unwrap_or_default()
    );

    for (position, question) in bank.questions().iter().enumerate() {
        for (index, characteristic) in question.characteristics.iter().enumerate() {
            service.record(&id, question.id, index, demo_response(characteristic.dosha))?;
        }

        let status = service.get(&id)?.status_view();
        println!(
            "  Question {}/{} {:<22} answered | progress {}%",
            position + 1,
            status.total_questions,
            question.category,
            status.progress_pct
        );

        if position + 1 < bank.len() {
            service.navigate(&id, Step::Next)?;
        }
    }

    let report = service.finalize(&id, today)?;
    println!();
    render_report(&report);

    if !skip_export {
        let config = AppConfig::load()?;
        let document = service.document(&id, document_format(html), today)?;
        let directory = output.unwrap_or(config.reports.output_dir);
        let path = write_document(&directory, &document)?;
        println!("\nReport saved to {}", path.display());
    }

    service.discard(&id)?;
    Ok(())
}

fn document_format(html: bool) -> DocumentFormat {
    if html {
        DocumentFormat::Html
    } else {
        DocumentFormat::Text
    }
}

pub(crate) fn write_document(
    directory: &Path,
    document: &ReportDocument,
) -> Result<PathBuf, AppError> {
    std::fs::create_dir_all(directory)?;
    let path = directory.join(&document.file_name);
    std::fs::write(&path, &document.body)?;
    Ok(path)
}

fn render_score(result: &ScoreAggregate) {
    let distribution = result.distribution;
    let constitution = distribution.constitution();

    println!(
        "Raw weights: Vata {} | Pitta {} | Kapha {}",
        result.raw.vata, result.raw.pitta, result.raw.kapha
    );
    if result.fallback {
        println!("No weight recorded; showing the balanced distribution");
    }
    for dosha in distribution.ranked() {
        println!(
            "  {:<6} {:>3}% {}",
            dosha.label(),
            distribution.get(dosha),
            bar(distribution.get(dosha))
        );
    }
    println!("Constitution: {}", constitution.label());
}

fn render_report(report: &AssessmentReport) {
    let view = report.view();

    println!("Your Prakriti: {}", view.title);
    if let Some(profile) = &view.profile {
        println!(
            "Prepared for {} ({}, {}) on {}",
            profile.name,
            profile.age,
            profile.location,
            view.generated_on.format("%B %d, %Y")
        );
    }
    if view.result.balanced_fallback {
        println!("No weight recorded; showing the balanced distribution");
    }

    println!("\nDosha distribution");
    for entry in &view.result.ranked {
        println!(
            "  {:<6} {:>3}% {} ({})",
            entry.label,
            entry.percentage,
            bar(entry.percentage),
            entry.elements
        );
    }

    println!("\nKey {} characteristics", view.result.primary_label);
    for trait_line in view
        .result
        .key_characteristics
        .physical
        .iter()
        .chain(view.result.key_characteristics.mental.iter())
    {
        println!("- {}", trait_line);
    }

    println!("\n{}", view.introduction);
    println!("\nHow to maintain balance");
    for (index, practice) in view.balance_practices.iter().enumerate() {
        println!("{}. {}", index + 1, practice);
    }

    for (heading, items) in view.recommendations.sections() {
        println!("\n{}", heading);
        for item in items {
            println!("- {}", item);
        }
    }
}

fn bar(percentage: u8) -> String {
    "#".repeat(usize::from(percentage / 5))
}

fn demo_profile() -> UserProfile {
    UserProfile {
        first_name: "Maya".to_string(),
        last_name: "Raman".to_string(),
        email: "maya.raman@example.com".to_string(),
        age: 29,
        gender: Gender::Female,
        location: "Bengaluru".to_string(),
    }
}

fn demo_response(dosha: Dosha) -> ResponseLevel {
    match dosha {
        Dosha::Pitta => ResponseLevel::Yes,
        Dosha::Vata => ResponseLevel::Somewhat,
        Dosha::Kapha => ResponseLevel::No,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prakriti::workflows::assessment::{render_document, AnswerSheet};

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "prakriti-api-{}-{}",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    fn demo_sheet(bank: &QuestionBank) -> AnswerSheet {
        let mut sheet = AnswerSheet::new();
        for question in bank.questions() {
            for (index, characteristic) in question.characteristics.iter().enumerate() {
                sheet.record(
                    question.id,
                    index,
                    demo_response(characteristic.dosha),
                    characteristic.dosha,
                );
            }
        }
        sheet
    }

    #[test]
    fn demo_answers_produce_pitta_vata() {
        let bank = QuestionBank::standard();
        let result = aggregate(demo_sheet(&bank).answers());
        assert_eq!(result.distribution.constitution().label(), "Pitta-Vata");
    }

    #[test]
    fn bar_scales_to_twenty_columns() {
        assert_eq!(bar(100).len(), 20);
        assert_eq!(bar(33).len(), 6);
        assert!(bar(0).is_empty());
    }

    #[test]
    fn write_document_creates_missing_directories() {
        let dir = scratch_dir("export").join("nested");
        let report = AssessmentReport::new(
            aggregate(demo_sheet(&QuestionBank::standard()).answers()).distribution,
            Some(demo_profile()),
            NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date"),
        );
        let document = render_document(&report, DocumentFormat::Html).expect("profile present");

        let path = write_document(&dir, &document).expect("document written");

        assert_eq!(
            path.file_name().and_then(|name| name.to_str()),
            Some("prakriti-report-maya-raman.html")
        );
        let written = std::fs::read_to_string(&path).expect("read back");
        assert_eq!(written, document.body);
        let _ = std::fs::remove_dir_all(dir.parent().expect("scratch root"));
    }

    #[test]
    fn score_command_reads_answer_files() {
        let dir = scratch_dir("score");
        std::fs::create_dir_all(&dir).expect("scratch dir");
        let path = dir.join("answers.csv");
        std::fs::write(
            &path,
            "question_id,characteristic_index,response\n1,0,yes\n1,1,no\n",
        )
        .expect("write answers");

        run_score(ScoreArgs {
            answers: path.clone(),
        })
        .expect("partial sheets still score");

        let err = run_score(ScoreArgs {
            answers: dir.join("missing.csv"),
        })
        .expect_err("missing file");
        assert!(matches!(err, AppError::Import(_)));
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn report_command_rejects_invalid_profiles() {
        let dir = scratch_dir("report");
        std::fs::create_dir_all(&dir).expect("scratch dir");
        let answers = dir.join("answers.csv");
        std::fs::write(&answers, "question_id,characteristic_index,response\n1,0,yes\n")
            .expect("write answers");
        let profile = dir.join("profile.json");
        std::fs::write(
            &profile,
            r#"{"firstName":"M","lastName":"Raman","email":"maya@example.com","age":29,"gender":"female","location":"Bengaluru"}"#,
        )
        .expect("write profile");

        let err = run_report(ReportArgs {
            answers,
            profile,
            output: Some(dir.clone()),
            html: false,
            today: None,
        })
        .expect_err("profile invalid");
        assert!(matches!(err, AppError::Assessment(_)));
        let _ = std::fs::remove_dir_all(dir);
    }
}
