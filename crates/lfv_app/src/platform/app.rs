use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::mpsc::{self, TryRecvError};
use std::thread;
use std::time::Duration;

use anyhow::Context;
use lfv_engine::{ApiSettings, EngineHandle};
use lfv_logging::{lfv_info, lfv_warn, LogDestination};
use log::LevelFilter;

use super::config;
use super::controller::PageController;
use super::ui;
use super::ui::input::Command;

const LOG_FILE: &str = "./learnfromvideo.log";
const EVENT_POLL: Duration = Duration::from_millis(50);

pub fn run_app() -> anyhow::Result<()> {
    lfv_logging::initialize(LogDestination::File, LevelFilter::Info, Path::new(LOG_FILE));

    let config = config::load_from_environment().context("loading configuration")?;
    lfv_info!("Using backend API at {}", config.api_base());

    let engine = EngineHandle::new(ApiSettings::new(config.api_base()))
        .context("starting request engine")?;
    let mut controller = PageController::new(engine);

    let (line_tx, line_rx) = mpsc::channel::<String>();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if line_tx.send(line).is_err() {
                        break;
                    }
                }
                Err(err) => {
                    lfv_warn!("stdin closed: {}", err);
                    break;
                }
            }
        }
    });

    let mut out = io::stdout().lock();
    controller.start();

    loop {
        controller.wait_for_event(EVENT_POLL);
        controller.pump_events();
        if let Some(view) = controller.take_render() {
            print_lines(&mut out, &ui::render::render(&view))?;
            if let Some(status) = ui::render::status_line(&view) {
                writeln!(out, "{status}")?;
            }
        }

        let line = match line_rx.try_recv() {
            Ok(line) => line,
            Err(TryRecvError::Empty) => continue,
            Err(TryRecvError::Disconnected) => break,
        };

        match ui::input::parse_command(&line) {
            Command::Submit(text) => {
                controller.set_input(text);
                controller.submit();
            }
            Command::SubmitCurrent => controller.submit(),
            Command::Example => controller.use_example(),
            Command::Open(position) => {
                let course_id = controller
                    .state()
                    .recent_courses()
                    .as_slice()
                    .get(position - 1)
                    .map(|course| course.id.clone());
                match course_id {
                    Some(course_id) => controller.select_recent_course(course_id),
                    None => writeln!(out, "No recent course #{position}")?,
                }
            }
            Command::Help => {
                print_lines(&mut out, &ui::render::render(&controller.view()))?;
            }
            Command::Quit => break,
            Command::Unknown(text) => {
                writeln!(out, "Unknown command {text:?}; {}", ui::constants::INPUT_HINT)?;
            }
        }
    }

    controller.stop();
    lfv_info!("Page closed");
    Ok(())
}

fn print_lines(out: &mut impl Write, lines: &[String]) -> io::Result<()> {
    writeln!(out)?;
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()
}
