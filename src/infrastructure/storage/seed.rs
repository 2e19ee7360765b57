//! Fixed sample records loaded at startup and by reset

use crate::domain::CreateUserDto;

pub fn seed_users() -> Vec<CreateUserDto> {
    [
        ("John Doe", "john.doe@example.com", 28, "Engineering"),
        ("Jane Smith", "jane.smith@example.com", 25, "Marketing"),
        ("Mike Johnson", "mike.johnson@example.com", 32, "Sales"),
    ]
    .into_iter()
    .map(|(name, email, age, department)| CreateUserDto {
        name: name.to_string(),
        email: email.to_string(),
        age,
        department: department.to_string(),
    })
    .collect()
}
