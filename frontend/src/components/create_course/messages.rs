#[derive(Clone)]
pub enum Msg {
    UpdateTitle(String),
    UpdateProfessor(String),
    UpdateLocation(String),
    Submit,
}
