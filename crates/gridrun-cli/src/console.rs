//! The interactive menu.

use std::io::{self, BufRead, Write};

use gridrun_core::parse_program;
use gridrun_engine::{parse_dimensions, parse_placement, Session};
use tracing::debug;

/// What to do after a session's menu loop ends.
enum Flow {
    StartOver,
    Exit,
}

/// Line-oriented menu over any reader and writer.
///
/// End of input at any prompt ends the program cleanly.
pub struct Console<R, W> {
    input: R,
    out: W,
    dims: Option<(i32, i32)>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// `dims` skips the dimension prompt when given.
    pub fn new(input: R, out: W, dims: Option<(i32, i32)>) -> Self {
        Self { input, out, dims }
    }

    /// Run sessions until the user exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.out, "Welcome to Auto Driving Car Simulation!")?;
            let Some(mut session) = self.create_session()? else {
                return Ok(());
            };
            match self.menu(&mut session)? {
                Flow::StartOver => debug!("starting over"),
                Flow::Exit => return Ok(()),
            }
        }
    }

    fn create_session(&mut self) -> io::Result<Option<Session>> {
        if let Some((w, h)) = self.dims {
            match Session::new(w, h) {
                Ok(session) => {
                    writeln!(self.out, "You have created a field of {w} x {h}\n")?;
                    return Ok(Some(session));
                }
                Err(e) => writeln!(self.out, "Invalid input: {e}. Please enter again.")?,
            }
        }
        loop {
            let Some(line) = self.prompt(
                "Please enter the width and height of the simulation field in x y format: ",
            )?
            else {
                return Ok(None);
            };
            let created = parse_dimensions(&line).map_err(|e| e.to_string()).and_then(|(w, h)| {
                Session::new(w, h)
                    .map(|s| (s, w, h))
                    .map_err(|e| e.to_string())
            });
            match created {
                Ok((session, w, h)) => {
                    writeln!(self.out, "You have created a field of {w} x {h}\n")?;
                    return Ok(Some(session));
                }
                Err(e) => writeln!(self.out, "Invalid input: {e}. Please enter again.")?,
            }
        }
    }

    fn menu(&mut self, session: &mut Session) -> io::Result<Flow> {
        loop {
            writeln!(
                self.out,
                "Please choose from the following options:\n[1] Add a car to field\n[2] Run simulation"
            )?;
            let Some(choice) = self.read_line()? else {
                return Ok(Flow::Exit);
            };
            match choice.as_str() {
                "1" => {
                    if !self.add_car(session)? {
                        return Ok(Flow::Exit);
                    }
                    self.print_roster(session)?;
                }
                "2" => {
                    self.print_roster(session)?;
                    if let Err(e) = session.run() {
                        writeln!(self.out, "{e}")?;
                    }
                    writeln!(self.out, "After simulation, the result is:")?;
                    for outcome in session.outcomes() {
                        writeln!(self.out, "{outcome}")?;
                    }
                    return self.after_run();
                }
                _ => writeln!(self.out, "Invalid choice. Please enter 1 or 2.")?,
            }
        }
    }

    fn after_run(&mut self) -> io::Result<Flow> {
        loop {
            writeln!(
                self.out,
                "Please choose from the following options:\n[1] Start over\n[2] Exit"
            )?;
            let Some(choice) = self.read_line()? else {
                return Ok(Flow::Exit);
            };
            match choice.as_str() {
                "1" => return Ok(Flow::StartOver),
                "2" => {
                    writeln!(self.out, "Thank you for running the simulation. Goodbye!")?;
                    return Ok(Flow::Exit);
                }
                _ => writeln!(self.out, "Invalid choice. Please enter 1 or 2.")?,
            }
        }
    }

    /// Walk the name, placement and program prompts. Returns `false` if
    /// input ended before the car was complete.
    fn add_car(&mut self, session: &mut Session) -> io::Result<bool> {
        let name = loop {
            let Some(name) = self.prompt("Please enter the name of the car: ")? else {
                return Ok(false);
            };
            if name.is_empty() {
                writeln!(self.out, "Invalid input: car name must not be empty. Please enter again.")?;
            } else if session.grid().require_vehicle(&name).is_ok() {
                writeln!(
                    self.out,
                    "A car with the name {name} already exists. Please enter a unique name."
                )?;
            } else {
                break name;
            }
        };

        let (position, heading) = loop {
            let Some(line) = self.prompt(&format!(
                "Please enter initial position of car {name} in x y Direction format: "
            ))?
            else {
                return Ok(false);
            };
            let placed = parse_placement(&line)
                .map_err(|e| e.to_string())
                .and_then(|(c, h)| {
                    session
                        .grid()
                        .check_placement(c)
                        .map(|()| (c, h))
                        .map_err(|e| e.to_string())
                });
            match placed {
                Ok(p) => break p,
                Err(e) => writeln!(self.out, "Invalid input: {e}. Please enter again.")?,
            }
        };

        let program = loop {
            let Some(line) = self.prompt(&format!("Please enter the commands for car {name}: "))?
            else {
                return Ok(false);
            };
            match parse_program(&line) {
                Ok(_) => break line,
                Err(e) => writeln!(self.out, "Invalid input: {e}. Please enter again.")?,
            }
        };

        if let Err(e) = session.add_vehicle(&name, position, heading, &program) {
            writeln!(self.out, "Invalid input: {e}.")?;
        }
        Ok(true)
    }

    fn print_roster(&mut self, session: &Session) -> io::Result<()> {
        writeln!(self.out, "Your current list of cars are:")?;
        for entry in session.roster() {
            writeln!(self.out, "{entry}")?;
        }
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.out, "{text}")?;
        self.out.flush()?;
        self.read_line()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
