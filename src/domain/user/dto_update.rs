/// Validated partial update. `None` leaves the stored value unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateUserDto {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<u64>,
    pub department: Option<String>,
}
