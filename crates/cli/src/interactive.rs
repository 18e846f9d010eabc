//! Interactive menu mode

use std::io::Write;

use anyhow::Context;
use chrono::Datelike;
use console::style;

use scholar_domain::{
    all_courses, courses_not_taken, enroll, select_courses, Degree, Department, Instructor,
    Person, Repository, Semester, Student,
};

use crate::prompt::Prompter;
use crate::registry::Registry;
use crate::render::{course_line, Describe};

/// One entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    AddStudent,
    ViewStudent,
    DeleteStudent,
    AddSemesterAndCourses,
    ListStudents,
    AddInstructor,
    ViewInstructor,
    DeleteInstructor,
    ListInstructors,
    Exit,
}

impl MenuAction {
    pub fn all() -> &'static [MenuAction] {
        &[
            MenuAction::AddStudent,
            MenuAction::ViewStudent,
            MenuAction::DeleteStudent,
            MenuAction::AddSemesterAndCourses,
            MenuAction::ListStudents,
            MenuAction::AddInstructor,
            MenuAction::ViewInstructor,
            MenuAction::DeleteInstructor,
            MenuAction::ListInstructors,
            MenuAction::Exit,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::AddStudent => "Add New Student",
            MenuAction::ViewStudent => "View Student Details",
            MenuAction::DeleteStudent => "Delete Student",
            MenuAction::AddSemesterAndCourses => "Add New Semester and Courses",
            MenuAction::ListStudents => "Display Student List",
            MenuAction::AddInstructor => "Add New Instructor",
            MenuAction::ViewInstructor => "View Instructor Details",
            MenuAction::DeleteInstructor => "Delete Instructor",
            MenuAction::ListInstructors => "Display Instructor List",
            MenuAction::Exit => "Exit",
        }
    }

    /// What was being attempted, for "Error <context>: ..." messages
    fn failure_context(&self) -> &'static str {
        match self {
            MenuAction::AddStudent => "adding student",
            MenuAction::ViewStudent => "viewing student details",
            MenuAction::DeleteStudent => "deleting student",
            MenuAction::AddSemesterAndCourses => "adding semester and courses",
            MenuAction::ListStudents => "displaying student list",
            MenuAction::AddInstructor => "adding instructor",
            MenuAction::ViewInstructor => "viewing instructor details",
            MenuAction::DeleteInstructor => "deleting instructor",
            MenuAction::ListInstructors => "displaying instructor list",
            MenuAction::Exit => "exiting",
        }
    }

    fn labels() -> Vec<String> {
        Self::all().iter().map(|a| a.label().to_string()).collect()
    }
}

fn current_year() -> String {
    chrono::Local::now().year().to_string()
}

fn labels<T: ToString>(values: &[T]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

/// Menu-driven console over a student and an instructor store
pub struct InteractiveCli<P, W> {
    prompter: P,
    out: W,
}

impl<P: Prompter, W: Write> InteractiveCli<P, W> {
    pub fn new(prompter: P, out: W) -> Self {
        Self { prompter, out }
    }

    /// Run the menu until Exit is chosen or the prompt itself fails
    pub fn run<S, I>(&mut self, registry: &mut Registry<S, I>) -> anyhow::Result<()>
    where
        S: Repository<Student>,
        I: Repository<Instructor>,
    {
        writeln!(self.out, "{}", style("Scholar - Student Management").bold())?;

        loop {
            let choice = self.prompter.select("Select an option", &MenuAction::labels())?;
            let action = MenuAction::all()
                .get(choice)
                .copied()
                .context("menu selection out of range")?;

            if !self.handle_action(action, registry)? {
                break;
            }
        }

        Ok(())
    }

    /// Perform one menu action; `Ok(false)` means exit.
    ///
    /// Failures inside the action are reported and swallowed so the menu
    /// keeps running. Only output errors escape.
    pub fn handle_action<S, I>(
        &mut self,
        action: MenuAction,
        registry: &mut Registry<S, I>,
    ) -> anyhow::Result<bool>
    where
        S: Repository<Student>,
        I: Repository<Instructor>,
    {
        let result = match action {
            MenuAction::AddStudent => self.add_student(&mut registry.students),
            MenuAction::ViewStudent => self.view_entity::<Student, _>(&registry.students),
            MenuAction::DeleteStudent => {
                self.delete_entity::<Student, _>(&mut registry.students)
            }
            MenuAction::AddSemesterAndCourses => {
                self.add_semester_and_courses(&mut registry.students)
            }
            MenuAction::ListStudents => self.display_list::<Student, _>(&registry.students),
            MenuAction::AddInstructor => self.add_instructor(&mut registry.instructors),
            MenuAction::ViewInstructor => {
                self.view_entity::<Instructor, _>(&registry.instructors)
            }
            MenuAction::DeleteInstructor => {
                self.delete_entity::<Instructor, _>(&mut registry.instructors)
            }
            MenuAction::ListInstructors => {
                self.display_list::<Instructor, _>(&registry.instructors)
            }
            MenuAction::Exit => {
                writeln!(self.out, "Goodbye!")?;
                return Ok(false);
            }
        };

        if let Err(e) = result {
            tracing::warn!(action = action.label(), error = %e, "Menu action failed");
            writeln!(
                self.out,
                "{}",
                style(format!("Error {}: {:#}", action.failure_context(), e)).red()
            )?;
        }
        Ok(true)
    }

    fn prompt_person(&mut self) -> anyhow::Result<Person> {
        Ok(Person {
            first_name: Some(self.prompter.input("First Name")?),
            middle_name: Some(self.prompter.input("Middle Name")?),
            last_name: Some(self.prompter.input("Last Name")?),
        })
    }

    fn select_department(&mut self) -> anyhow::Result<Department> {
        let index = self
            .prompter
            .select("Select Department", &labels(Department::all()))?;
        Department::all()
            .get(index)
            .copied()
            .context("invalid department choice")
    }

    fn select_degree(&mut self) -> anyhow::Result<Degree> {
        let index = self.prompter.select("Select Degree", &labels(Degree::all()))?;
        Degree::all()
            .get(index)
            .copied()
            .context("invalid degree choice")
    }

    fn add_student<S: Repository<Student>>(&mut self, students: &mut S) -> anyhow::Result<()> {
        let person = self.prompt_person()?;
        let student_id = self.prompter.input("Student ID")?;
        let semester_code = self.prompter.input("Joining Batch (Semester Code)")?;
        let year = self
            .prompter
            .input_with_default("Joining Year", &current_year())?;
        let department = self.select_department()?;
        let degree = self.select_degree()?;

        let student = Student::new(student_id, department, degree)
            .with_person(person)
            .with_joining_batch(Semester::new(semester_code, year));
        students.add(student)?;

        writeln!(self.out, "{}", style("Student Added Successfully.").green())?;
        Ok(())
    }

    fn add_instructor<I: Repository<Instructor>>(
        &mut self,
        instructors: &mut I,
    ) -> anyhow::Result<()> {
        let person = self.prompt_person()?;
        let instructor_id = self.prompter.input("Instructor ID")?;
        let department = self.select_department()?;

        let catalog = all_courses();
        writeln!(self.out, "Available courses:")?;
        for course in &catalog {
            writeln!(self.out, "{}", course)?;
        }
        let selection = self
            .prompter
            .input("Courses taught (course IDs separated by comma, blank for none)")?;
        let (courses, unknown) = select_courses(&catalog, &selection);
        for course_id in unknown {
            writeln!(self.out, "Course with ID {} not found.", course_id)?;
        }

        let mut instructor = Instructor::new(instructor_id, department).with_person(person);
        instructor.courses_taught = courses;
        instructors.add(instructor)?;

        writeln!(self.out, "{}", style("Instructor Added Successfully.").green())?;
        Ok(())
    }

    fn view_entity<T: Describe, R: Repository<T>>(&mut self, repository: &R) -> anyhow::Result<()> {
        let id = self.prompter.input(&format!("Enter {} ID", T::TITLE))?;
        match repository.get_by_id(&id) {
            Some(entity) => {
                writeln!(self.out, "{} Details:", T::TITLE)?;
                for line in entity.detail_lines() {
                    writeln!(self.out, "{}", line)?;
                }
            }
            None => writeln!(self.out, "{} not found.", T::TITLE)?,
        }
        Ok(())
    }

    fn delete_entity<T: Describe, R: Repository<T>>(
        &mut self,
        repository: &mut R,
    ) -> anyhow::Result<()> {
        let id = self
            .prompter
            .input(&format!("Enter {} ID to delete", T::TITLE))?;
        if repository.delete(&id)? {
            writeln!(
                self.out,
                "{}",
                style(format!("{} Deleted successfully.", T::TITLE)).green()
            )?;
        } else {
            writeln!(self.out, "{} not found.", T::TITLE)?;
        }
        Ok(())
    }

    fn display_list<T: Describe, R: Repository<T>>(&mut self, repository: &R) -> anyhow::Result<()> {
        let entities = repository.get_all_entities();
        if entities.is_empty() {
            writeln!(self.out, "No {}s found.", T::KIND)?;
            return Ok(());
        }

        writeln!(self.out, "{} List:", T::TITLE)?;
        for entity in entities {
            writeln!(self.out, "{}", entity)?;
        }
        Ok(())
    }

    fn add_semester_and_courses<S: Repository<Student>>(
        &mut self,
        students: &mut S,
    ) -> anyhow::Result<()> {
        let student_id = self.prompter.input("Enter Student ID")?;
        if !students.exists(&student_id) {
            writeln!(self.out, "Student not found.")?;
            return Ok(());
        }

        writeln!(self.out, "Enter Semester Information:")?;
        let semester_code = self
            .prompter
            .input("Semester Code (e.g., Spring, Summer, Fall)")?;
        let year = self.prompter.input_with_default("Year", &current_year())?;
        let semester = Semester::new(semester_code, year);

        let catalog = all_courses();
        let student = students
            .get_by_id_mut(&student_id)
            .context("student disappeared during enrollment")?;

        writeln!(self.out, "Courses not taken yet:")?;
        for course in courses_not_taken(&catalog, student) {
            writeln!(self.out, "{}", course_line(course))?;
        }

        let selection = self
            .prompter
            .input("Select courses to add to the semester (enter course IDs separated by comma)")?;
        let label = semester.to_string();
        let outcome = enroll(student, semester, &catalog, &selection);
        for course_id in &outcome.added {
            writeln!(self.out, "Added course {} to {}.", course_id, label)?;
        }
        for course_id in &outcome.unknown {
            writeln!(self.out, "Course with ID {} not found.", course_id)?;
        }

        students.save_changes()?;
        writeln!(
            self.out,
            "{}",
            style("Semester and courses added successfully.").green()
        )?;
        Ok(())
    }

    /// Consume the session and hand back the output sink
    pub fn into_output(self) -> W {
        self.out
    }
}
