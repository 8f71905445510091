mod import_directive_tests;
