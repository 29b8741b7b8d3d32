mod document_template_tests;
mod naming_tests;
