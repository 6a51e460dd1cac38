mod resend_error_tests;
