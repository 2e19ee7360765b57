/// Validated input for creating a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUserDto {
    pub name: String,
    pub email: String,
    pub age: u64,
    pub department: String,
}
