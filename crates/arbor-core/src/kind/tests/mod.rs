mod kind_tests;
