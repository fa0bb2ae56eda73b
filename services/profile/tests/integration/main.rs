mod helpers;

mod academic_info_test;
mod document_test;
mod employment_info_test;
mod personal_info_test;
mod wizard_test;
