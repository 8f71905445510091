mod raise_tests;
