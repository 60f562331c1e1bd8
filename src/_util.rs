#[derive(Debug)]
pub struct SetupError {
    pub message: String,
}

impl From<String> for SetupError {
    fn from(value: String) -> Self {
        SetupError { message: value }
    }
}

impl From<&str> for SetupError {
    fn from(value: &str) -> Self {
        SetupError {
            message: value.to_string(),
        }
    }
}

#[derive(Debug)]
pub struct ParseError {
    pub message: String,
}

impl From<String> for ParseError {
    fn from(value: String) -> Self {
        ParseError { message: value }
    }
}

impl From<&str> for ParseError {
    fn from(value: &str) -> Self {
        ParseError {
            message: value.to_string(),
        }
    }
}

#[derive(Debug)]
pub enum DeceiveError {
    SetupError(SetupError),
    ParseError(ParseError),
}

impl From<SetupError> for DeceiveError {
    fn from(value: SetupError) -> Self {
        DeceiveError::SetupError(value)
    }
}

impl From<ParseError> for DeceiveError {
    fn from(value: ParseError) -> Self {
        DeceiveError::ParseError(value)
    }
}
